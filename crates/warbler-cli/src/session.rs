use anyhow::Result;
use cliclack::{input, spinner};
use console::style;

use warbler::agent::Agent;
use warbler::models::message::Message;

/// Conversation identifier for the local demo session
const CONVERSATION_ID: &str = "123";

pub struct Session<A: Agent> {
    agent: A,
    run_count: usize,
}

impl<A: Agent> Session<A> {
    pub fn new(agent: A) -> Self {
        Session {
            agent,
            run_count: 0,
        }
    }

    /// Read prompts until the operator exits, running one agent turn per prompt.
    pub async fn start(&mut self) -> Result<()> {
        loop {
            self.run_count += 1;
            println!("----- Agent Run {} -----", self.run_count);

            let prompt_text: String =
                match input(format!("{}", style("Prompt:").blue())).placeholder("").interact() {
                    Ok(text) => text,
                    // The input channel closes on CTRL+C / CTRL+D; treat it as
                    // a normal interrupt.
                    Err(_) => break,
                };
            if prompt_text.trim().eq_ignore_ascii_case("/exit") {
                break;
            }

            self.run_once(prompt_text.trim()).await?;
        }
        Ok(())
    }

    /// Run a single agent turn and display the results.
    pub async fn run_once(&self, prompt: &str) -> Result<()> {
        let spin = spinner();
        spin.start("Running");
        let result = self
            .agent
            .create_response(Message::new(CONVERSATION_ID, prompt))
            .await;
        spin.stop("");

        show_results(&result?);
        Ok(())
    }
}

fn show_results(messages: &[Message]) {
    println!();
    println!("{}", style("Results:").blue().bold());
    for message in messages {
        match media_reference(message) {
            Some(reference) => println!("{}\n", reference),
            None => {
                render(&message.text);
                println!();
            }
        }
    }
}

/// The URL or content id a media-typed message displays as; None for text.
fn media_reference(message: &Message) -> Option<String> {
    if !message.is_media() {
        return None;
    }
    Some(message.url.clone().unwrap_or_else(|| message.text.clone()))
}

fn render(content: &str) {
    bat::PrettyPrinter::new()
        .input_from_bytes(content.as_bytes())
        .language("markdown")
        .print()
        .unwrap();
}

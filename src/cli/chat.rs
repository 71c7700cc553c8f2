use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::app::{Controller, Exchange};
use crate::catalog::ProductId;
use crate::core::AppConfig;

const HELP: &str = "Commands:
  /filter <category>  list products in a category
  /toggle <id>        select or deselect a product
  /remove <id>        deselect a product
  /clear              deselect everything
  /selected           show the selection
  /routine            generate a routine for the selection
  anything else is sent as a follow-up question";

fn print_exchange(exchange: &Exchange) {
    match exchange {
        Exchange::Answered(msg) | Exchange::Failed(msg) => println!("{}", msg),
    }
}

fn parse_id(arg: &str) -> Option<ProductId> {
    arg.trim().parse().ok()
}

pub async fn run(config: &AppConfig) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let controller = Controller::init(config).await?;

    println!("{}", HELP);

    loop {
        let line = match rl.readline(">>> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        };
        let _ = rl.add_history_entry(line.as_str());
        let trimmed = line.trim();
        let (command, arg) = trimmed.split_once(' ').unwrap_or((trimmed, ""));

        match command {
            "/filter" => {
                let products = controller.set_filter(arg);
                if products.is_empty() {
                    println!("No products found in this category");
                }
                for p in products {
                    println!("[{}] {} - {}", p.id, p.brand, p.name);
                }
            }
            "/toggle" | "/remove" => {
                let Some(id) = parse_id(arg) else {
                    println!("Expected a product id");
                    continue;
                };
                let selection = if command == "/toggle" {
                    controller.toggle(id).await?
                } else {
                    controller.remove(id).await?
                };
                println!("{} selected", selection.len());
            }
            "/clear" => {
                controller.clear().await?;
                println!("Selection cleared");
            }
            "/selected" => {
                let selection = controller.selection();
                if selection.is_empty() {
                    println!("No products selected yet.");
                }
                for p in selection.products() {
                    println!("[{}] {} - {}", p.id, p.brand, p.name);
                }
            }
            "/routine" => match controller.generate_routine().await {
                Ok(exchange) => print_exchange(&exchange),
                Err(e) => println!("{}", e),
            },
            "/help" => println!("{}", HELP),
            _ => {
                if let Some(exchange) = controller.ask_follow_up(trimmed).await? {
                    print_exchange(&exchange);
                }
            }
        }
    }

    Ok(())
}

//! Terminal front end: prompt over stdin/stdout and a small command shell

use std::io::{self, Write};

use dialoguer::Confirm;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{
    controller::ResourceController,
    prompt::Prompt,
    resources::Resource,
    table::Action,
};

/// `alert`/`confirm` on the terminal
pub struct ConsolePrompt;

impl Prompt for ConsolePrompt {
    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("error: {}", message);
    }

    fn confirm(&self, message: &str) -> bool {
        // the terminal read blocks; keep it off the runtime's worker
        let answer = tokio::task::block_in_place(|| {
            Confirm::new().with_prompt(message).default(false).interact()
        });
        accepted(answer)
    }
}

/// A confirmation that could not be shown counts as "no"
fn accepted(answer: Result<bool, dialoguer::Error>) -> bool {
    answer.unwrap_or_else(|e| {
        tracing::warn!("Confirmation prompt failed: {}", e);
        false
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Show,
    Set { field: String, value: String },
    Clear(String),
    Submit,
    Row(Action),
    Cancel,
    Help,
    Quit,
    Nothing,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let id = |what: &str| -> Result<i32, String> {
            rest.parse::<i32>()
                .map_err(|_| format!("usage: {} <id>", what))
        };

        Ok(match word.to_ascii_lowercase().as_str() {
            "" => Command::Nothing,
            "list" | "ls" | "refresh" => Command::List,
            "show" => Command::Show,
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None if !rest.is_empty() => (rest, ""),
                    None => return Err("usage: set <field> <value>".to_string()),
                };
                Command::Set {
                    field: field.to_string(),
                    value: value.to_string(),
                }
            }
            "clear" if !rest.is_empty() => Command::Clear(rest.to_string()),
            "clear" => return Err("usage: clear <field>".to_string()),
            "submit" | "save" => Command::Submit,
            "edit" => Command::Row(Action::Edit(id("edit")?)),
            "delete" | "rm" => Command::Row(Action::Delete(id("delete")?)),
            "cancel" => Command::Cancel,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(format!("unknown command '{}', type 'help'", other)),
        })
    }
}

const HELP: &str = "\
commands:
  list                 re-fetch and show the table
  show                 show the table and the form
  set <field> <value>  fill a form field (checkboxes take yes/no)
  clear <field>        empty a form field
  submit               create, or update the record being edited
  edit <id>            load a record into the form
  delete <id>          delete a record
  cancel               stop editing
  quit";

/// Read commands from `input` until `quit` or end of input
pub async fn run_shell<R, P, I>(
    controller: &mut ResourceController<R, P>,
    input: I,
) -> io::Result<()>
where
    R: Resource,
    P: Prompt,
    I: AsyncBufRead + Unpin,
{
    controller.load().await;
    print_table(controller);
    println!("{}", controller.form());

    let mut lines = input.lines();
    loop {
        print!("{}> ", R::LABELS.plural);
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(usage) => {
                eprintln!("{}", usage);
                continue;
            }
        };

        match command {
            Command::Nothing => {}
            Command::List => {
                controller.relist().await;
                print_table(controller);
            }
            Command::Show => {
                print_table(controller);
                println!("{}", controller.form());
            }
            Command::Set { field, value } => {
                if let Err(e) = controller.form_mut().form_mut().input(&field, &value) {
                    controller.prompt().error(&e.to_string());
                }
            }
            Command::Clear(field) => {
                if let Err(e) = controller.form_mut().form_mut().clear(&field) {
                    controller.prompt().error(&e.to_string());
                }
            }
            Command::Submit => {
                controller.submit().await;
                print_table(controller);
                println!("{}", controller.form());
            }
            Command::Row(action) => {
                controller.dispatch(action).await;
                if let Action::Delete(_) = action {
                    print_table(controller);
                }
                println!("{}", controller.form());
            }
            Command::Cancel => {
                controller.cancel();
                println!("{}", controller.form());
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }
    Ok(())
}

fn print_table<R: Resource, P: Prompt>(controller: &ResourceController<R, P>) {
    if let Some(table) = controller.table().current() {
        println!("{}", table);
    }
}

use std::fmt;

use inquire::{InquireError, Select, Text};
use tracing::error;

use crate::repository::Repository;
use crate::users::repo_types::UserRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Delete,
    List,
    Search,
    Add,
    Exit,
}

impl Operation {
    const ALL: [Operation; 5] = [
        Operation::Delete,
        Operation::List,
        Operation::Search,
        Operation::Add,
        Operation::Exit,
    ];
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Delete => "Delete",
            Operation::List => "List",
            Operation::Search => "Search for id",
            Operation::Add => "Add",
            Operation::Exit => "Exit",
        })
    }
}

/// Blocking menu loop. Storage errors are logged and reported as a message;
/// the loop keeps going until the user picks Exit or cancels the menu prompt.
pub async fn run<R: Repository<UserRecord>>(repo: &R) {
    loop {
        let op = match Select::new("Select operation", Operation::ALL.to_vec()).prompt() {
            Ok(op) => op,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => {
                error!(error = %e, "menu prompt failed");
                break;
            }
        };

        match op {
            Operation::Delete => delete_user(repo).await,
            Operation::List => list_users(repo).await,
            Operation::Search => search_user(repo).await,
            Operation::Add => add_user(repo).await,
            Operation::Exit => break,
        }
    }
    println!("Bye.");
}

/// Ids are positive integers; anything else is reported and treated as "no
/// input" so the caller drops back to the menu.
fn parse_id(input: &str) -> Option<i32> {
    input.trim().parse::<i32>().ok().filter(|id| *id > 0)
}

fn prompt_id(message: &str) -> Option<i32> {
    let input = prompt_text(message)?;
    let id = parse_id(&input);
    if id.is_none() {
        println!("'{}' is not a valid user id.", input.trim());
    }
    id
}

/// Text prompt that treats cancellation and empty input as "nothing entered".
fn prompt_text(message: &str) -> Option<String> {
    match Text::new(message).prompt() {
        Ok(input) if input.trim().is_empty() => {
            println!("Nothing entered.");
            None
        }
        Ok(input) => Some(input),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => None,
        Err(e) => {
            error!(error = %e, "prompt failed");
            None
        }
    }
}

async fn delete_user<R: Repository<UserRecord>>(repo: &R) {
    let Some(id) = prompt_id("User id to delete:") else {
        return;
    };
    match repo.delete(id).await {
        Ok(()) => println!("User deleted."),
        Err(e) => {
            error!(error = %e, id, "delete failed");
            println!("Could not delete user.");
        }
    }
}

async fn list_users<R: Repository<UserRecord>>(repo: &R) {
    match repo.get_all().await {
        Ok(users) if users.is_empty() => println!("(no users)"),
        Ok(users) => {
            for user in &users {
                println!("{user}");
            }
        }
        Err(e) => {
            error!(error = %e, "list failed");
            println!("Could not list users.");
        }
    }
}

async fn search_user<R: Repository<UserRecord>>(repo: &R) {
    let Some(id) = prompt_id("User id to search:") else {
        return;
    };
    match repo.get_by_id(id).await {
        Ok(Some(user)) => println!("{user}"),
        Ok(None) => println!("User not found."),
        Err(e) => {
            error!(error = %e, id, "search failed");
            println!("Could not search for user.");
        }
    }
}

async fn add_user<R: Repository<UserRecord>>(repo: &R) {
    let Some(username) = prompt_text("Username:") else {
        return;
    };
    let Some(password) = prompt_text("Password:") else {
        return;
    };
    let Some(email) = prompt_text("Email:") else {
        return;
    };

    let mut user = UserRecord::new(username, password, email);
    match repo.save(&mut user).await {
        Ok(true) => println!("User added with id {}.", user.id),
        Ok(false) => println!("Existing user with email {} updated.", user.email),
        Err(e) => {
            error!(error = %e, "save failed");
            println!("Could not save user.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_positive_integers() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("  7 "), Some(7));
    }

    #[test]
    fn parse_id_rejects_non_ids() {
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("-3"), None);
        assert_eq!(parse_id("4.5"), None);
    }

    #[test]
    fn menu_offers_the_five_operations_with_exit_last() {
        assert_eq!(Operation::ALL.len(), 5);
        assert_eq!(Operation::ALL[4], Operation::Exit);
        let labels: Vec<String> = Operation::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["Delete", "List", "Search for id", "Add", "Exit"]);
    }
}

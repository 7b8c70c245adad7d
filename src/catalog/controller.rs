use tracing::debug;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::lend_book_cmd::{LendBookCommand, LendBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::Command;
use crate::core::controller::{ShellError, usage_error};

pub const USAGE: &str = "\
Commands (fields separated by '|'):
  add <title> | <author> | <isbn>
  add-ebook <title> | <author> | <isbn> | <download size MB>
  lend <isbn>
  return <isbn>
  remove <isbn>
  show <isbn>
  list
  author <name>
  help
  quit";

// Route is the outcome of dispatching one console line
#[derive(Debug, PartialEq)]
pub enum Route {
    Reply(Result<String, ShellError>),
    Quit,
    Skip,
}

pub fn dispatch(svc: &mut dyn CatalogService, line: &str) -> Route {
    let line = line.trim();
    if line.is_empty() {
        return Route::Skip;
    }
    let (verb, args) = match line.split_once(char::is_whitespace) {
        Some((verb, args)) => (verb, args.trim()),
        None => (line, ""),
    };
    debug!(verb, "dispatching console command");
    let reply = match verb.to_lowercase().as_str() {
        "add" => add_book(svc, args),
        "add-ebook" => add_ebook(svc, args),
        "lend" => lend_book(svc, args),
        "return" => return_book(svc, args),
        "remove" => remove_book(svc, args),
        "show" => find_book_by_isbn(svc, args),
        "list" => list_books(svc),
        "author" => books_by_author(svc, args),
        "help" => Ok(USAGE.to_string()),
        "quit" | "exit" => return Route::Quit,
        other => Err(usage_error(format!("unknown command '{}', type 'help' for usage", other).as_str())),
    };
    Route::Reply(reply)
}

fn fields<const N: usize>(args: &str, usage: &str) -> Result<[String; N], ShellError> {
    let parts: Vec<String> = args.split('|').map(|s| s.trim().to_string()).collect();
    <[String; N]>::try_from(parts).map_err(|_| usage_error(format!("usage: {}", usage).as_str()))
}

pub fn add_book(svc: &mut dyn CatalogService, args: &str) -> Result<String, ShellError> {
    let [title, author, isbn] = fields::<3>(args, "add <title> | <author> | <isbn>")?;
    let req = AddBookCommandRequest::new(title.as_str(), author.as_str(), isbn.as_str());
    let res = AddBookCommand::new(svc).execute(req)?;
    Ok(format!("Book '{}' added to the library.", res.book.title))
}

pub fn add_ebook(svc: &mut dyn CatalogService, args: &str) -> Result<String, ShellError> {
    let [title, author, isbn, size] = fields::<4>(args, "add-ebook <title> | <author> | <isbn> | <download size MB>")?;
    let req = AddBookCommandRequest::ebook(title.as_str(), author.as_str(), isbn.as_str(), size.as_str());
    let res = AddBookCommand::new(svc).execute(req)?;
    Ok(format!("Book '{}' added to the library.", res.book.title))
}

pub fn lend_book(svc: &mut dyn CatalogService, isbn: &str) -> Result<String, ShellError> {
    let _ = LendBookCommand::new(svc).execute(LendBookCommandRequest::new(isbn))?;
    Ok("Book lent successfully.".to_string())
}

pub fn return_book(svc: &mut dyn CatalogService, isbn: &str) -> Result<String, ShellError> {
    let _ = ReturnBookCommand::new(svc).execute(ReturnBookCommandRequest::new(isbn))?;
    Ok("Book returned successfully.".to_string())
}

pub fn remove_book(svc: &mut dyn CatalogService, isbn: &str) -> Result<String, ShellError> {
    let _ = RemoveBookCommand::new(svc).execute(RemoveBookCommandRequest::new(isbn))?;
    Ok("Book removed from library.".to_string())
}

pub fn find_book_by_isbn(svc: &dyn CatalogService, isbn: &str) -> Result<String, ShellError> {
    let res = GetBookCommand::new(svc).execute(GetBookCommandRequest::new(isbn))?;
    Ok(res.book.to_string())
}

pub fn list_books(svc: &dyn CatalogService) -> Result<String, ShellError> {
    let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::all())?;
    let mut lines = vec!["Library Inventory:".to_string()];
    lines.extend(res.books.iter().map(|b| b.to_string()));
    Ok(lines.join("\n"))
}

pub fn books_by_author(svc: &dyn CatalogService, author: &str) -> Result<String, ShellError> {
    let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::by_author(author))?;
    if res.books.is_empty() {
        return Ok("No books by this author.".to_string());
    }
    let mut lines = vec![format!("Books by {}:", author)];
    lines.extend(res.books.iter().map(|b| b.to_string()));
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use crate::catalog::controller::{dispatch, Route, USAGE};
    use crate::catalog::factory;
    use crate::core::controller::ShellStatus;
    use crate::core::domain::Configuration;

    fn reply(route: Route) -> Result<String, (ShellStatus, String)> {
        match route {
            Route::Reply(res) => res,
            other => panic!("expected a reply, got {:?}", other),
        }
    }

    #[test]
    fn test_should_run_console_session() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        let svc = svc.as_mut();

        assert_eq!(Ok("Book '1984' added to the library.".to_string()), reply(dispatch(svc, "add 1984 | Orwell | 111")));
        assert_eq!(Ok("Book 'Brave New World' added to the library.".to_string()),
                   reply(dispatch(svc, "add-ebook Brave New World | Huxley | 222 | 5.0")));
        assert_eq!(Ok("Book lent successfully.".to_string()), reply(dispatch(svc, "lend 111")));
        assert_eq!(Ok("Library Inventory:\n\
                       '1984' by Orwell (ISBN: 111) - Lent\n\
                       'Brave New World' by Huxley (ISBN: 222) - Available - 5.0 MB".to_string()),
                   reply(dispatch(svc, "list")));
        assert_eq!(Ok("Book returned successfully.".to_string()), reply(dispatch(svc, "RETURN 111")));
        assert_eq!(Ok("Books by Orwell:\n'1984' by Orwell (ISBN: 111) - Available".to_string()),
                   reply(dispatch(svc, "author Orwell")));
        assert_eq!(Ok("Book removed from library.".to_string()), reply(dispatch(svc, "remove 111")));
        assert_eq!(Ok("No books by this author.".to_string()), reply(dispatch(svc, "author Orwell")));
        assert_eq!(Ok("'Brave New World' by Huxley (ISBN: 222) - Available - 5.0 MB".to_string()),
                   reply(dispatch(svc, "show 222")));
    }

    #[test]
    fn test_should_report_errors() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        let svc = svc.as_mut();
        let _ = reply(dispatch(svc, "add 1984 | Orwell | 111")).expect("should add book");

        let (status, message) = reply(dispatch(svc, "add Animal Farm | Orwell | 111")).expect_err("duplicate isbn");
        assert_eq!(ShellStatus::Rejected, status);
        assert!(message.contains("111"));

        let _ = reply(dispatch(svc, "lend 111")).expect("should lend book");
        assert!(reply(dispatch(svc, "lend 111")).is_err());
        assert!(reply(dispatch(svc, "remove 999")).is_err());
        assert!(reply(dispatch(svc, "add-ebook t | a | 3 | huge")).is_err());
        assert!(reply(dispatch(svc, "lend")).is_err());

        let (_, message) = reply(dispatch(svc, "add only-a-title")).expect_err("missing fields");
        assert!(message.starts_with("usage: add"));
        let (_, message) = reply(dispatch(svc, "borrow 111")).expect_err("unknown verb");
        assert!(message.contains("unknown command 'borrow'"));
    }

    #[test]
    fn test_should_route_control_lines() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        let svc = svc.as_mut();
        assert_eq!(Route::Skip, dispatch(svc, "   "));
        assert_eq!(Route::Quit, dispatch(svc, "quit"));
        assert_eq!(Route::Quit, dispatch(svc, "exit"));
        assert_eq!(Ok(USAGE.to_string()), reply(dispatch(svc, "help")));
        assert_eq!(Ok("Library Inventory:".to_string()), reply(dispatch(svc, "list")));
    }
}

use std::str::FromStr;

use crate::model::ItemId;
use crate::recipe::Servings;
use crate::AppError;

/// Everything a user can ask the app to do
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Submit a search query
    Search(String),
    /// Show another page of the current results
    GoToPage(usize),
    /// The location fragment changed, e.g. `#47746`
    Navigate(String),
    /// Start-up with the current location fragment
    Load(String),
    Servings(Servings),
    /// Copy the current recipe's ingredients to the shopping list
    AddToList,
    DeleteItem(ItemId),
    UpdateCount(ItemId, f64),
    /// Like or unlike the current recipe
    ToggleLike,
}

impl FromStr for Intent {
    type Err = AppError;

    /// Parse a terminal command such as `search pizza`, `open 47746` or `count 3 2.5`
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if let Some(fragment) = line.strip_prefix('#') {
            return Ok(Intent::Navigate(fragment.to_string()));
        }

        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map(|(c, r)| (c, r.trim()))
            .unwrap_or((line, ""));

        match command.to_lowercase().as_str() {
            "search" | "s" if !rest.is_empty() => Ok(Intent::Search(rest.to_string())),
            "page" | "p" => Ok(Intent::GoToPage(parse_arg(rest, "page number")?)),
            "open" | "o" if !rest.is_empty() => Ok(Intent::Navigate(rest.to_string())),
            "+" | "more" => Ok(Intent::Servings(Servings::Increase)),
            "-" | "less" => Ok(Intent::Servings(Servings::Decrease)),
            "add" => Ok(Intent::AddToList),
            "remove" | "rm" => Ok(Intent::DeleteItem(parse_arg(rest, "item id")?)),
            "count" => {
                let (id, value) = rest.split_once(char::is_whitespace).ok_or_else(|| {
                    AppError::ParseError("usage: count <item id> <amount>".to_string())
                })?;
                Ok(Intent::UpdateCount(
                    parse_arg(id, "item id")?,
                    parse_arg(value.trim(), "amount")?,
                ))
            }
            "like" => Ok(Intent::ToggleLike),
            _ => Err(AppError::ParseError(line.to_string())),
        }
    }
}

fn parse_arg<T: FromStr>(value: &str, what: &str) -> Result<T, AppError> {
    value
        .parse()
        .map_err(|_| AppError::ParseError(format!("expected {}, got {:?}", what, value)))
}

use std::str::FromStr;

use business::domain::product::model::{Product, ProductDraft};
use business::domain::product::value_objects::{CategoryFilter, ProductId};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CommandError {
    #[error("Unknown command: {0}. Type `help` for the list of commands.")]
    Unknown(String),
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("Not a page number: {0}")]
    InvalidPage(String),
    #[error("Expected `on` or `off`, got: {0}")]
    InvalidToggle(String),
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Expected field=value, got: {0}")]
    MalformedField(String),
    #[error("Not a price: {0}")]
    InvalidPrice(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    Title,
    Price,
    Description,
    Image,
    Category,
}

impl FromStr for Field {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Field::Title),
            "price" => Ok(Field::Price),
            "description" => Ok(Field::Description),
            "image" => Ok(Field::Image),
            "category" => Ok(Field::Category),
            _ => Err(CommandError::UnknownField(s.to_string())),
        }
    }
}

/// `field=value` assignments from a create/edit line. Words without `=`
/// continue the previous value, so `title=Laptop Stand` keeps both words.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldEdits(Vec<(Field, String)>);

impl FieldEdits {
    fn parse(words: &[&str]) -> Result<Self, CommandError> {
        let mut edits: Vec<(Field, String)> = Vec::new();
        for word in words {
            match word.split_once('=') {
                Some((name, value)) => edits.push((name.parse()?, value.to_string())),
                None => match edits.last_mut() {
                    Some((_, value)) => {
                        value.push(' ');
                        value.push_str(word);
                    }
                    None => return Err(CommandError::MalformedField(word.to_string())),
                },
            }
        }
        Ok(Self(edits))
    }

    fn apply(&self, draft: &mut ProductDraft) -> Result<(), CommandError> {
        for (field, value) in &self.0 {
            match field {
                Field::Title => draft.title = value.clone(),
                Field::Price => {
                    draft.price = value
                        .parse()
                        .map_err(|_| CommandError::InvalidPrice(value.clone()))?
                }
                Field::Description => draft.description = value.clone(),
                Field::Image => draft.image = value.clone(),
                Field::Category => draft.category = value.clone(),
            }
        }
        Ok(())
    }

    /// Builds a creation draft; fields not mentioned stay empty.
    pub fn into_draft(&self) -> Result<ProductDraft, CommandError> {
        let mut draft = ProductDraft::default();
        self.apply(&mut draft)?;
        Ok(draft)
    }

    /// Applies the edits on top of an existing product, keeping its id and like flag.
    pub fn edit(&self, product: &Product) -> Result<Product, CommandError> {
        let mut draft = product.draft();
        self.apply(&mut draft)?;
        Ok(Product {
            is_liked: product.is_liked,
            ..Product::from_draft(product.id.clone(), draft)
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Search(String),
    Category(CategoryFilter),
    Categories,
    Favorites(bool),
    Page(usize),
    Next,
    Prev,
    Show(ProductId),
    Like(ProductId),
    Delete(ProductId),
    Create(FieldEdits),
    Edit(ProductId, FieldEdits),
    Reload,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  list                          show the current page
  search <text>                 filter by title (empty text clears)
  category <name|all>           filter by category
  categories                    list known categories
  favorites on|off              show only liked products
  page <n> | next | prev        move between pages
  show <id>                     product details
  like <id>                     toggle like
  delete <id>                   delete a product
  create field=value ...        fields: title price description image category
  edit <id> field=value ...     change fields of a product
  reload                        fetch the catalog again
  quit";

fn id_argument(words: &[&str]) -> Result<ProductId, CommandError> {
    words
        .first()
        .map(|id| ProductId::new(*id))
        .ok_or(CommandError::MissingArgument("id"))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((name, args)) = words.split_first() else {
            return Ok(Command::List);
        };

        match *name {
            "list" | "ls" => Ok(Command::List),
            "search" => Ok(Command::Search(args.join(" "))),
            "category" => match args {
                [] => Err(CommandError::MissingArgument("category")),
                _ => Ok(Command::Category(CategoryFilter::from(args.join(" ").as_str()))),
            },
            "categories" => Ok(Command::Categories),
            "favorites" => match args.first().copied() {
                Some("on") => Ok(Command::Favorites(true)),
                Some("off") => Ok(Command::Favorites(false)),
                Some(other) => Err(CommandError::InvalidToggle(other.to_string())),
                None => Err(CommandError::MissingArgument("on|off")),
            },
            "page" => {
                let raw = args.first().ok_or(CommandError::MissingArgument("page"))?;
                raw.parse()
                    .map(Command::Page)
                    .map_err(|_| CommandError::InvalidPage(raw.to_string()))
            }
            "next" => Ok(Command::Next),
            "prev" => Ok(Command::Prev),
            "show" => Ok(Command::Show(id_argument(args)?)),
            "like" => Ok(Command::Like(id_argument(args)?)),
            "delete" | "rm" => Ok(Command::Delete(id_argument(args)?)),
            "create" => Ok(Command::Create(FieldEdits::parse(args)?)),
            "edit" => {
                let id = id_argument(args)?;
                Ok(Command::Edit(id, FieldEdits::parse(&args[1..])?))
            }
            "reload" => Ok(Command::Reload),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_search_with_spaces() {
        assert_eq!(
            "search laptop stand".parse::<Command>(),
            Ok(Command::Search("laptop stand".to_string()))
        );
        assert_eq!("search".parse::<Command>(), Ok(Command::Search(String::new())));
    }

    #[test]
    fn should_parse_category_sentinel() {
        assert_eq!(
            "category all".parse::<Command>(),
            Ok(Command::Category(CategoryFilter::All))
        );
        assert_eq!(
            "category men's clothing".parse::<Command>(),
            Ok(Command::Category(CategoryFilter::Only(
                "men's clothing".to_string()
            )))
        );
    }

    #[test]
    fn should_reject_invalid_arguments() {
        assert_eq!(
            "favorites maybe".parse::<Command>(),
            Err(CommandError::InvalidToggle("maybe".to_string()))
        );
        assert_eq!(
            "page two".parse::<Command>(),
            Err(CommandError::InvalidPage("two".to_string()))
        );
        assert_eq!(
            "delete".parse::<Command>(),
            Err(CommandError::MissingArgument("id"))
        );
        assert_eq!(
            "dance".parse::<Command>(),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }

    #[test]
    fn should_build_draft_from_multi_word_fields() {
        let Ok(Command::Create(edits)) = "create title=Laptop Stand price=29.5 category=electronics"
            .parse::<Command>()
        else {
            panic!("expected create command");
        };

        let draft = edits.into_draft().unwrap();

        assert_eq!(draft.title, "Laptop Stand");
        assert_eq!(draft.price, 29.5);
        assert_eq!(draft.category, "electronics");
        assert!(draft.description.is_empty());
    }

    #[test]
    fn should_edit_product_keeping_id_and_like_flag() {
        let Ok(Command::Edit(id, edits)) = "edit 3 price=12".parse::<Command>() else {
            panic!("expected edit command");
        };
        let product = Product {
            is_liked: true,
            ..Product::from_remote(
                id.clone(),
                "Mens Cotton Jacket".to_string(),
                55.99,
                "Great outerwear jackets".to_string(),
                "https://example.com/jacket.png".to_string(),
                "men's clothing".to_string(),
            )
        };

        let edited = edits.edit(&product).unwrap();

        assert_eq!(edited.id, id);
        assert_eq!(edited.price, 12.0);
        assert_eq!(edited.title, "Mens Cotton Jacket");
        assert!(edited.is_liked);
    }

    #[test]
    fn should_reject_unknown_field_and_bad_price() {
        assert_eq!(
            "create colour=red".parse::<Command>(),
            Err(CommandError::UnknownField("colour".to_string()))
        );
        let Ok(Command::Create(edits)) = "create price=cheap".parse::<Command>() else {
            panic!("expected create command");
        };
        assert_eq!(
            edits.into_draft(),
            Err(CommandError::InvalidPrice("cheap".to_string()))
        );
    }
}

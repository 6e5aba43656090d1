use log::{debug, info};
use std::env;
use std::io::Stdout;
use tokio::io::{AsyncBufReadExt, BufReader};

use recipe_box::{App, AppConfig, Intent, TerminalView, View};

const HELP: &str = "Commands:
  search <query>      search recipes
  page <n>            show another page of results
  open <id> | #<id>   show a recipe
  + | -               more or fewer servings
  add                 add the recipe's ingredients to the shopping list
  list                show the shopping list
  rm <item>           remove a shopping list item
  count <item> <n>    change the amount of a shopping list item
  like                like or unlike the recipe
  likes               show liked recipes
  help                show this text
  quit                leave";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::load()?;
    debug!("{:#?}", config);

    let mut app = App::builder()
        .config(config)
        .view(TerminalView::stdout())
        .build()?;

    // An optional first argument is the fragment to open, like a page loaded with `#47746`
    let fragment = env::args().nth(1).unwrap_or_default();
    app.dispatch(Intent::Load(fragment)).await;
    info!("Ready");
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "help" | "?" => println!("{}", HELP),
            "list" => show_list(&mut app),
            "likes" => show_likes(&mut app),
            command => match command.parse::<Intent>() {
                Ok(intent) => app.dispatch(intent).await,
                Err(e) => println!("{} (try `help`)", e),
            },
        }
    }

    Ok(())
}

fn show_list(app: &mut App<TerminalView<Stdout>>) {
    let items = app
        .state()
        .list
        .as_ref()
        .map(|list| list.items().to_vec())
        .unwrap_or_default();
    if items.is_empty() {
        println!("The shopping list is empty.");
    }
    for item in &items {
        app.view_mut().render_item(item);
    }
}

fn show_likes(app: &mut App<TerminalView<Stdout>>) {
    let likes = app
        .state()
        .likes
        .as_ref()
        .map(|likes| likes.likes().to_vec())
        .unwrap_or_default();
    app.view_mut().toggle_like_menu(likes.len());
    for like in &likes {
        app.view_mut().render_like(like);
    }
}

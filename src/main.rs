use clap::{Parser, Subcommand};
use console::style;

use desktop_starter::commands::greet;
use desktop_starter::config::{self, Config, DatabaseConfig, DEFAULT_CONFIG_FILE};
use desktop_starter::error::{Result, StarterError};
use desktop_starter::slices::todos::{
    CreateTodoInput, Todo, TodoPriority, TodoStatus, TodoStore, UpdateTodoInput,
};
use desktop_starter::theme::{self, Theme};
use desktop_starter::users::UserStore;
use desktop_starter::{logging, ui, Database};

#[derive(Parser, Debug)]
#[command(name = "desktop-starter")]
#[command(about = "Desktop starter app (opens the UI when no command is given)")]
struct Cli {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    #[arg(long, env = config::DB_PATH_ENV)]
    db: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Greet {
        name: String,
    },
    Todos {
        #[command(subcommand)]
        command: TodosCommand,
    },
    Users {
        #[command(subcommand)]
        command: UsersCommand,
    },
    Theme {
        #[command(subcommand)]
        command: ThemeCommand,
    },
}

#[derive(Subcommand, Debug)]
enum TodosCommand {
    List,
    Add {
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<TodoStatus>,
        #[arg(long)]
        priority: Option<TodoPriority>,
        #[arg(long)]
        due: Option<String>,
    },
    Update {
        id: i32,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<TodoStatus>,
        #[arg(long)]
        priority: Option<TodoPriority>,
        #[arg(long)]
        due: Option<String>,
    },
    Delete {
        id: i32,
    },
    Toggle {
        id: i32,
    },
}

#[derive(Subcommand, Debug)]
enum UsersCommand {
    List,
    Add {
        name: String,
        email: String,
    },
    Delete {
        id: i32,
    },
}

#[derive(Subcommand, Debug)]
enum ThemeCommand {
    Show,
    Set { theme: Theme },
}

fn main() -> Result<()> {
    logging::init(logging::DEFAULT_FILTER);
    config::load_dotenv();

    let cli = Cli::parse();
    let mut config = Config::load(&cli.config)?;
    if let Some(db) = &cli.db {
        config.database = Some(DatabaseConfig {
            sqlite_path: Some(db.clone()),
        });
    }

    let Some(command) = cli.command else {
        ui::launch_ui(config);
        return Ok(());
    };

    let runtime = tokio::runtime::Runtime::new().map_err(|e| StarterError::Runtime(e.to_string()))?;
    runtime.block_on(run_command(&config, command))
}

async fn run_command(config: &Config, command: Commands) -> Result<()> {
    let db_path = config.db_path();
    match command {
        Commands::Greet { name } => println!("{}", greet(&name)),
        Commands::Todos { command } => {
            let store = TodoStore::new(Database::open(db_path).await?);
            run_todos(&store, command).await?;
        }
        Commands::Users { command } => {
            let store = UserStore::new(Database::open(db_path).await?);
            run_users(&store, command).await?;
        }
        Commands::Theme { command } => match command {
            ThemeCommand::Show => println!("{}", theme::load_theme(&db_path)),
            ThemeCommand::Set { theme: value } => {
                theme::save_theme(&db_path, value)?;
                println!("{} theme set to {}", style("✔").green(), value);
            }
        },
    }
    Ok(())
}

async fn run_todos(store: &TodoStore, command: TodosCommand) -> Result<()> {
    match command {
        TodosCommand::List => {
            let todos = store.list_todos().await?;
            if todos.is_empty() {
                println!("{}", style("No todos yet.").color256(245));
            }
            for todo in &todos {
                print_todo(todo);
            }
        }
        TodosCommand::Add {
            title,
            description,
            status,
            priority,
            due,
        } => {
            let todo = store
                .create_todo(CreateTodoInput {
                    title,
                    description,
                    status,
                    priority,
                    due_date: due,
                })
                .await?;
            println!("{} created todo #{}", style("✔").green(), todo.id);
        }
        TodosCommand::Update {
            id,
            title,
            description,
            status,
            priority,
            due,
        } => {
            let input = UpdateTodoInput {
                title,
                description,
                status,
                priority,
                due_date: due,
            };
            match store.update_todo(id, input).await? {
                Some(todo) => print_todo(&todo),
                None => return Err(not_found(id)),
            }
        }
        TodosCommand::Delete { id } => {
            if !store.delete_todo(id).await? {
                return Err(not_found(id));
            }
            println!("{} deleted todo #{id}", style("✔").green());
        }
        TodosCommand::Toggle { id } => match store.toggle_todo_status(id).await? {
            Some(todo) => print_todo(&todo),
            None => return Err(not_found(id)),
        },
    }
    Ok(())
}

async fn run_users(store: &UserStore, command: UsersCommand) -> Result<()> {
    match command {
        UsersCommand::List => {
            for user in store.list_users().await? {
                println!(
                    "{} {} {}",
                    style(format!("#{}", user.id)).color256(245),
                    style(&user.name).bold(),
                    style(format!("<{}>", user.email)).color256(81)
                );
            }
        }
        UsersCommand::Add { name, email } => {
            let user = store.insert_user(&name, &email).await?;
            println!("{} added user #{}", style("✔").green(), user.id);
        }
        UsersCommand::Delete { id } => {
            if !store.delete_user(id).await? {
                return Err(StarterError::Validation(format!("user {id} not found")));
            }
            println!("{} deleted user #{id}", style("✔").green());
        }
    }
    Ok(())
}

fn print_todo(todo: &Todo) {
    let marker = match todo.status {
        TodoStatus::Completed => style("✔").green(),
        TodoStatus::InProgress => style("…").yellow(),
        TodoStatus::Pending => style("○").color256(245),
    };
    let due = todo
        .due_date
        .as_deref()
        .map(|d| format!(" due {d}"))
        .unwrap_or_default();
    println!(
        "{} {} {} [{}]{}",
        marker,
        style(format!("#{}", todo.id)).color256(245),
        style(&todo.title).bold(),
        todo.priority,
        style(due).color256(214)
    );
}

fn not_found(id: i32) -> StarterError {
    StarterError::Validation(format!("todo {id} not found"))
}

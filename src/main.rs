use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::Result;
use projstore::{
    Priority, Project, ProjectFilter, ProjectStatus, Store, Task, TaskFilter, TaskStatus,
};

#[derive(Parser)]
#[command(name = "projstore")]
#[command(about = "projstore CLI - explore the in-memory project/task store on a sample dataset")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Emit JSON instead of human-readable output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects
    Projects {
        /// Only projects with this status (active, completed, on-hold)
        #[arg(short, long)]
        status: Option<String>,
    },

    /// List tasks
    Tasks {
        /// Only tasks belonging to this project id
        #[arg(short, long)]
        project: Option<String>,

        /// Only tasks with this status (todo, in-progress, completed)
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Search projects and tasks by name/title and description
    Search {
        /// Case-insensitive substring to look for
        query: String,
    },

    /// Show summary statistics
    Stats,
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // The store is process-resident: every invocation starts from the seed.
    let store = Store::with_sample_data();

    match cli.command {
        Commands::Projects { status } => {
            let filter = ProjectFilter {
                status: status.map(|s| s.parse::<ProjectStatus>()).transpose()?,
                ..Default::default()
            };
            let projects = store.filter_projects(&filter);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&projects)?);
            } else {
                for project in &projects {
                    print_project(project);
                }
                println!("{} project(s)", projects.len());
            }
        }
        Commands::Tasks { project, status } => {
            let filter = TaskFilter {
                project_id: project,
                status: status.map(|s| s.parse::<TaskStatus>()).transpose()?,
                ..Default::default()
            };
            let tasks = store.filter_tasks(&filter);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else {
                for task in &tasks {
                    print_task(task);
                }
                println!("{} task(s)", tasks.len());
            }
        }
        Commands::Search { query } => {
            let projects = store.search_projects(&query);
            let tasks = store.search_tasks(&query);
            if cli.json {
                let out = serde_json::json!({ "projects": projects, "tasks": tasks });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", "Projects".bold());
                for project in &projects {
                    print_project(project);
                }
                println!("{}", "Tasks".bold());
                for task in &tasks {
                    print_task(task);
                }
                println!("{} project(s), {} task(s)", projects.len(), tasks.len());
            }
        }
        Commands::Stats => {
            let projects = store.project_stats();
            let tasks = store.task_stats();
            if cli.json {
                let out = serde_json::json!({ "projects": projects, "tasks": tasks });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", "Projects".bold());
                println!("  total:     {}", projects.total);
                println!("  active:    {}", projects.active);
                println!("  completed: {}", projects.completed);
                println!("{}", "Tasks".bold());
                println!("  total:       {}", tasks.total);
                println!("  todo:        {}", tasks.todo);
                println!("  in-progress: {}", tasks.in_progress);
                println!("  completed:   {}", tasks.completed);
            }
        }
    }

    Ok(())
}

fn print_project(project: &Project) {
    let status = match project.status {
        ProjectStatus::Active => "active".green(),
        ProjectStatus::Completed => "completed".blue(),
        ProjectStatus::OnHold => "on-hold".yellow(),
    };
    println!(
        "{}  {}  [{}] [{}]",
        project.id.dimmed(),
        project.name.bold(),
        status,
        priority_label(project.priority),
    );
    println!("    {}", project.description);
}

fn print_task(task: &Task) {
    let status = match task.status {
        TaskStatus::Todo => "todo".yellow(),
        TaskStatus::InProgress => "in-progress".cyan(),
        TaskStatus::Completed => "completed".green(),
    };
    let assignee = task.assignee.as_deref().unwrap_or("unassigned");
    println!(
        "{}  {}  [{}] [{}] ({})",
        task.id.dimmed(),
        task.title.bold(),
        status,
        priority_label(task.priority),
        assignee,
    );
    println!("    project: {}", task.project_id.dimmed());
}

fn priority_label(priority: Priority) -> colored::ColoredString {
    match priority {
        Priority::Low => "low".normal(),
        Priority::Medium => "medium".yellow(),
        Priority::High => "high".red(),
    }
}

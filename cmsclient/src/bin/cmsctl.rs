use chrono::{DateTime, Utc};
use clap::{
    Parser,
    Subcommand,
};
use cmsclient::ClientConfig;
use cmscore::{
    ac::{
        Actor,
        Role,
    },
    content::{
        ContentItem,
        ContentKind,
    },
    schedule::to_iso8601,
    workflow::State,
};
use cmsctrl::{
    WorkflowCtrl,
    platform::Builder,
};

#[derive(Debug, Parser)]
struct Cli {
    #[clap(flatten)]
    config: ClientConfig,
    /// Name of the actor the actions are taken on behalf of.
    #[clap(long, value_name = "CMS_ACTOR", env = "CMS_ACTOR")]
    actor: String,
    /// Act with the admin role.
    #[clap(long)]
    admin: bool,
    #[clap(value_enum)]
    kind: ContentKind,
    id: i64,
    #[command(subcommand)]
    command: Commands,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the item and its workflow state.
    Status,
    /// List the transitions available to the actor.
    Actions,
    /// Move the item into the given state.
    #[command(arg_required_else_help = true)]
    Transition {
        #[clap(value_enum)]
        target: State,
    },
    /// Submit the item for review.
    Submit,
    /// Publish the item now.
    Publish,
    /// Revert the item to draft.
    Unpublish,
    /// Schedule the item for publication at an ISO-8601 timestamp.
    #[command(arg_required_else_help = true)]
    Schedule {
        at: DateTime<Utc>,
    },
    /// Cancel the pending scheduled publication.
    CancelSchedule,
}

fn print_item(item: &ContentItem) {
    let descriptor = item.status.descriptor();
    println!("{} {}: {}", item.id, item.title, descriptor.label);
    println!("  {}", descriptor.description);
    println!("  version {}", item.version);
    if let Some(at) = item.scheduled_at {
        println!("  scheduled for {}", to_iso8601(at));
    }
}

fn print_actions(ctrl: &WorkflowCtrl) {
    let transitions = ctrl.transitions();
    if transitions.is_empty() {
        println!("no actions available");
    }
    for transition in transitions {
        println!("{:<10} {}", transition.target, transition.description);
    }
    if ctrl.schedule_ctrl().is_active() {
        println!("{:<10} {}", "schedule", "Schedule publication");
        if ctrl.schedule_ctrl().scheduled_at().is_some() {
            println!("{:<10} {}", "cancel", "Cancel scheduled publication");
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    stderrlog::new()
        .module(module_path!())
        .module("cmsclient")
        .module("cmsctrl")
        .module("cmscore")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let roles = if args.admin {
        Role::Admin | Role::Editor
    } else {
        Role::Editor.into()
    };
    let platform = Builder::new()
        .backend(args.config.backend(args.kind))
        .actor(Actor::new(args.actor, roles))
        .build();
    let ctrl = platform.load_item(args.id).await?;

    match args.command {
        Commands::Status => print_item(&ctrl.item()),
        Commands::Actions => print_actions(&ctrl),
        Commands::Transition { target } => print_item(&ctrl.transition(target).await?),
        Commands::Submit => print_item(&ctrl.submit_for_review().await?),
        Commands::Publish => print_item(&ctrl.publish().await?),
        Commands::Unpublish => print_item(&ctrl.unpublish().await?),
        Commands::Schedule { at } => {
            print_item(&ctrl.schedule_ctrl().schedule(at).await?);
        }
        Commands::CancelSchedule => {
            if ctrl.schedule_ctrl().cancel().await? {
                print_item(&ctrl.item());
            } else {
                println!("item {} has no scheduled publication", args.id);
            }
        }
    }

    Ok(())
}

//! Interactive terminal shell
//!
//! Draws the browse and staging screens from the view projection and
//! translates chosen actions into controller operations. All state
//! lives in the controller; this module never touches buckets or
//! partition tags directly.

use crate::cli::style::{Stylize, check, spinner_style};
use anstream::println;
use dialoguer::Select;
use indicatif::ProgressBar;
use listfold::error::{Error, Result};
use listfold::merge::MergeController;
use listfold::source::ListSource;
use listfold::types::{Bucket, LoadStatus};
use listfold::view::{BoardView, BucketView, PartitionView};
use std::time::Duration;

/// One selectable action on the current screen
enum Action {
    /// Toggle a partition in the selection
    Toggle(u32),
    /// Request the staging transition
    CreateList,
    /// Move an item between buckets
    Move {
        item_id: u64,
        label: String,
        from: Bucket,
        to: Bucket,
    },
    /// Commit the staged board
    Update,
    /// Discard the staged board
    Cancel,
    /// Re-issue the fetch after a failure
    Retry,
    /// Leave the program
    Quit,
}

impl Action {
    fn label(&self) -> String {
        match self {
            Self::Toggle(partition) => format!("Toggle list {partition}"),
            Self::CreateList => "Create a new list".to_string(),
            Self::Move {
                label, from, to, ..
            } => format!("Move \"{label}\" from {from} to {to}"),
            Self::Update => "Update".to_string(),
            Self::Cancel => "Cancel".to_string(),
            Self::Retry => "Try again".to_string(),
            Self::Quit => "Quit".to_string(),
        }
    }
}

/// Run the interactive shell until the user quits
pub async fn run(source: &dyn ListSource) -> Result<()> {
    let mut controller = MergeController::new();
    load_with_spinner(&mut controller, source).await;

    loop {
        let view = BoardView::project(&controller);

        let actions = match &view.status {
            LoadStatus::Failed(message) => {
                render_failure(message);
                vec![Action::Retry, Action::Quit]
            }
            _ if view.buckets.is_empty() => render_browse(&view),
            _ => render_board(&view),
        };

        match prompt(&actions)? {
            Action::Toggle(partition) => controller.toggle(*partition),
            Action::CreateList => controller.request_merge(),
            Action::Move {
                item_id, from, to, ..
            } => {
                controller.move_item(*item_id, *from, *to);
            }
            Action::Update => {
                controller.commit();
                println!("{} New list created", check());
            }
            Action::Cancel => controller.cancel(),
            Action::Retry => load_with_spinner(&mut controller, source).await,
            Action::Quit => return Ok(()),
        }
    }
}

/// Fetch the item collection with a spinner
async fn load_with_spinner(controller: &mut MergeController, source: &dyn ListSource) {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!("Fetching lists from {}...", source.endpoint().accent()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    controller.load(source).await;

    if controller.repo().status().is_loaded() {
        spinner.finish_with_message(format!(
            "{} Loaded {} item(s)",
            check(),
            controller.repo().all().len().accent()
        ));
    } else {
        spinner.finish_and_clear();
    }
}

/// Show the selectable actions and read one choice
fn prompt(actions: &[Action]) -> Result<&Action> {
    let labels: Vec<String> = actions.iter().map(Action::label).collect();
    let choice = Select::new()
        .with_prompt("Action")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| Error::Internal(format!("failed to read choice: {e}")))?;
    Ok(&actions[choice])
}

/// Failure screen with a retry affordance
fn render_failure(message: &str) {
    println!();
    println!("{}", "Something went wrong fetching the lists.".warn());
    println!("  {}", message.muted());
}

/// Browsing screen: partitions with selection markers
fn render_browse(view: &BoardView) -> Vec<Action> {
    println!();
    println!("{}", "List Creation".emphasis());

    if let Some(message) = &view.validation {
        println!("{}", message.warn());
    }

    for partition in &view.partitions {
        render_partition(partition);
    }

    let mut actions: Vec<Action> = view
        .partitions
        .iter()
        .map(|p| Action::Toggle(p.partition))
        .collect();
    actions.push(Action::CreateList);
    actions.push(Action::Quit);
    actions
}

fn render_partition(partition: &PartitionView) {
    let marker = if partition.selected { "[x]" } else { "[ ]" };
    println!();
    println!(
        "{} {}",
        marker.accent(),
        format!("List {}", partition.partition).emphasis()
    );
    for item in &partition.items {
        println!("    {}", item.name);
        println!("      {}", item.description.muted());
    }
}

/// Staging screen: the three-bucket board
fn render_board(view: &BoardView) -> Vec<Action> {
    println!();
    println!("{}", "List Creation".emphasis());

    let mut actions = Vec::new();
    for bucket_view in &view.buckets {
        render_bucket(bucket_view);
        for item in &bucket_view.items {
            for &target in item.targets {
                actions.push(Action::Move {
                    item_id: item.id,
                    label: item.name.clone(),
                    from: bucket_view.bucket,
                    to: target,
                });
            }
        }
    }

    actions.push(Action::Cancel);
    actions.push(Action::Update);
    actions
}

fn render_bucket(bucket_view: &BucketView) {
    println!();
    let heading = bucket_view.partition.map_or_else(
        || bucket_view.bucket.to_string(),
        |partition| format!("{} (list {partition})", bucket_view.bucket),
    );
    println!("{}", heading.emphasis());
    if bucket_view.items.is_empty() {
        println!("    {}", "(empty)".muted());
    }
    for item in &bucket_view.items {
        println!("    {}", item.name);
        println!("      {}", item.description.muted());
    }
}

use std::fmt::Write;

use colored::*;
use daydo_core::{partition_by_completion, Presenter, Progress, TodoList, View};

const BAR_WIDTH: usize = 20;

const NO_LISTS: &str = "No lists yet. Create one to get started!";
const ALL_LISTS_COMPLETE: &str = "All lists are complete!";
const NO_TODOS: &str = "No to-dos in this list yet. Add one!";

/// Keeps the last frame the core rendered so a command prints the final state
/// once, after every mutation went through.
#[derive(Default)]
pub struct TerminalPresenter {
    frame: Option<String>,
}

impl Presenter for TerminalPresenter {
    fn render(&mut self, view: View<'_>) {
        self.frame = Some(match view {
            View::Lists { lists, overall } => format_lists(lists, &overall),
            View::List { list, progress } => format_list(list, &progress),
        });
    }
}

impl TerminalPresenter {
    pub fn flush(&mut self) {
        if let Some(frame) = self.frame.take() {
            println!("{frame}");
        }
    }
}

pub fn progress_bar(progress: &Progress) -> String {
    let filled = usize::from(progress.percent) * BAR_WIDTH / 100;
    format!(
        "{}{}",
        "█".repeat(filled).green(),
        "░".repeat(BAR_WIDTH - filled).dimmed()
    )
}

pub fn progress_line(progress: &Progress) -> String {
    format!(
        "{} {:>3}%  {} / {} completed",
        progress_bar(progress),
        progress.percent,
        progress.completed,
        progress.total
    )
}

fn format_lists(lists: &[TodoList], overall: &Progress) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", "❯".blue().bold(), "Overall progress".bold());
    let _ = writeln!(out, "  {}", progress_line(overall));

    if lists.is_empty() {
        let _ = write!(out, "\n  {}", NO_LISTS.dimmed());
        return out;
    }

    let (incomplete, complete) = partition_by_completion(lists);

    let _ = writeln!(out, "\n{}", "In progress".yellow().bold());
    if incomplete.is_empty() {
        let _ = writeln!(out, "  {}", ALL_LISTS_COMPLETE.dimmed());
    }
    for list in &incomplete {
        write_list_entry(&mut out, list);
    }

    if !complete.is_empty() {
        let _ = writeln!(out, "\n{}", "Completed".green().bold());
        for list in &complete {
            write_list_entry(&mut out, list);
        }
    }

    out.trim_end().to_owned()
}

fn write_list_entry(out: &mut String, list: &TodoList) {
    let progress = daydo_core::list_progress(list);
    let _ = writeln!(
        out,
        "  {} {}\n    {}",
        list.name.bold(),
        format!("[{}]", list.id).dimmed(),
        progress_line(&progress)
    );
}

fn format_list(list: &TodoList, progress: &Progress) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} {}",
        "❯".blue().bold(),
        list.name.bold(),
        format!("[{}]", list.id).dimmed()
    );
    let _ = writeln!(out, "  {}", progress_line(progress));

    if list.todos.is_empty() {
        let _ = write!(out, "\n  {}", NO_TODOS.dimmed());
        return out;
    }

    let (done, todo): (Vec<_>, Vec<_>) = list.todos.iter().partition(|t| t.completed);

    if !todo.is_empty() {
        let _ = writeln!(out, "\n{}", "To do".yellow().bold());
        for t in &todo {
            let _ = writeln!(out, "  ○ {} {}", t.name, format!("[{}]", t.id).dimmed());
        }
    }

    if !done.is_empty() {
        let _ = writeln!(out, "\n{}", "Done".green().bold());
        for t in &done {
            let _ = writeln!(
                out,
                "  {} {} {}",
                "●".green(),
                t.name.strikethrough().dimmed(),
                format!("[{}]", t.id).dimmed()
            );
        }
    }

    out.trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use daydo_core::{overall_progress, Store, Todo};

    fn todo(id: u64, name: &str, completed: bool) -> Todo {
        Todo {
            id,
            name: name.to_owned(),
            completed,
        }
    }

    fn list(id: u64, name: &str, todos: Vec<Todo>) -> TodoList {
        TodoList {
            id,
            name: name.to_owned(),
            todos,
        }
    }

    #[test]
    fn test_progress_bar_width() {
        colored::control::set_override(false);

        assert_eq!(progress_bar(&Progress::from_counts(0, 0)), "░".repeat(20));
        assert_eq!(
            progress_bar(&Progress::from_counts(1, 2)),
            format!("{}{}", "█".repeat(10), "░".repeat(10))
        );
        assert_eq!(progress_bar(&Progress::from_counts(3, 3)), "█".repeat(20));
    }

    #[test]
    fn test_empty_overview() {
        colored::control::set_override(false);

        let output = format_lists(&[], &Progress::default());
        assert!(output.contains(NO_LISTS));
        assert!(!output.contains("Completed"));
    }

    #[test]
    fn test_overview_groups_lists() {
        colored::control::set_override(false);

        let store = Store::new(vec![
            list(1, "Home", vec![todo(2, "Dishes", true)]),
            list(3, "Work", vec![todo(4, "Inbox", false)]),
        ]);
        let output = format_lists(&store.lists, &overall_progress(&store));

        let in_progress = output.find("In progress").unwrap();
        let completed = output.find("Completed").unwrap();
        let work = output.find("Work").unwrap();
        let home = output.find("Home").unwrap();
        assert!(in_progress < work && work < completed && completed < home);
        assert!(output.contains(" 50%  1 / 2 completed"));
    }

    #[test]
    fn test_all_lists_complete() {
        colored::control::set_override(false);

        let store = Store::new(vec![list(1, "Home", vec![todo(2, "Dishes", true)])]);
        let output = format_lists(&store.lists, &overall_progress(&store));
        assert!(output.contains(ALL_LISTS_COMPLETE));
    }

    #[test]
    fn test_single_list_view() {
        colored::control::set_override(false);

        let empty = list(1, "Home", vec![]);
        assert!(format_list(&empty, &Progress::default()).contains(NO_TODOS));

        let home = list(1, "Home", vec![todo(2, "Dishes", true), todo(3, "Laundry", false)]);
        let output = format_list(&home, &daydo_core::list_progress(&home));
        let to_do = output.find("To do").unwrap();
        let laundry = output.find("○ Laundry [3]").unwrap();
        let done = output.find("Done").unwrap();
        let dishes = output.find("● Dishes [2]").unwrap();
        assert!(to_do < laundry && laundry < done && done < dishes);
    }

    #[test]
    fn test_presenter_keeps_last_frame() {
        let mut presenter = TerminalPresenter::default();
        let home = list(1, "Home", vec![]);
        presenter.render(View::List {
            list: &home,
            progress: Progress::default(),
        });
        assert!(presenter.frame.as_deref().unwrap().contains("Home"));

        presenter.flush();
        assert!(presenter.frame.is_none());
    }
}

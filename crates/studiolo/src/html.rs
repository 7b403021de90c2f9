use chrono::NaiveDate;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::dates;
use crate::planner::Planner;
use crate::types::Assignment;

pub fn render_page(planner: &Planner, today: NaiveDate) -> Markup {
    let pending_count = planner.pending_sorted().len();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Studiolo" }
                style { (PreEscaped(CSS)) }
            }
            body {
                div.container {
                    h1 { "Studiolo" }
                    div.stats {
                        span { (planner.classes().len()) " classes" }
                        " · "
                        span #"pending-count" { (pending_count) " pending" }
                    }
                    div.layout {
                        div.sidebar {
                            (render_todo_list(planner, today))
                            (render_completed_list(planner))
                        }
                        div.main {
                            (render_classes(planner))
                            (render_assignment_form(planner))
                        }
                    }
                }
                script { (PreEscaped(JAVASCRIPT)) }
            }
        }
    }
}

fn render_todo_list(planner: &Planner, today: NaiveDate) -> Markup {
    let pending = planner.pending_sorted();

    html! {
        div.panel {
            h2 { "To-do list" }
            @if pending.is_empty() {
                div.empty-state {
                    p { "No pending assignments" }
                }
            } @else {
                div.todo-list {
                    @for assignment in &pending {
                        (render_todo_item(planner, assignment, today))
                    }
                }
            }
        }
    }
}

fn render_todo_item(planner: &Planner, assignment: &Assignment, today: NaiveDate) -> Markup {
    let overdue = dates::is_overdue(assignment.due, today);

    html! {
        div.todo-item.overdue[overdue] {
            div.todo-content {
                div.todo-name { (assignment.name) }
                div.todo-class { (planner.class_name(assignment.class_id)) }
                div.todo-due { "Due: " (dates::format_due(assignment.due, today)) }
            }
            div.todo-controls {
                form method="post" action={ "/assignments/" (assignment.id) "/toggle" } {
                    button.icon-button.complete type="submit" title="Mark complete" { "✓" }
                }
                form method="post" action={ "/assignments/" (assignment.id) "/delete" } {
                    button.icon-button.delete type="submit" title="Delete" { "✕" }
                }
            }
        }
    }
}

/// Completed panel, rendered only when something is done
fn render_completed_list(planner: &Planner) -> Markup {
    let completed = planner.completed();

    html! {
        @if !completed.is_empty() {
            div.panel {
                h2 { "Completed" }
                div.completed-list {
                    @for assignment in &completed {
                        div.completed-item {
                            div.todo-content {
                                div.todo-name.done { (assignment.name) }
                                div.todo-class { (planner.class_name(assignment.class_id)) }
                            }
                            form method="post" action={ "/assignments/" (assignment.id) "/delete" } {
                                button.icon-button.delete type="submit" title="Delete" { "✕" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_classes(planner: &Planner) -> Markup {
    html! {
        div.panel {
            h2 { "My classes" }
            form.class-form method="post" action="/classes/add" {
                input type="text" name="name" placeholder="Enter class name..." autocomplete="off";
                button type="submit" { "Add class" }
            }
            @if planner.classes().is_empty() {
                div.empty-state {
                    p { "No classes added yet. Add your first class to get started!" }
                }
            } @else {
                div.class-grid {
                    @for class in planner.classes() {
                        @let (total, pending) = planner.class_stats(class.id);
                        div.class-card {
                            div.class-info {
                                h3 { (class.name) }
                                p.class-counts {
                                    (total) " total assignments"
                                    @if pending > 0 {
                                        span.badge { (pending) " pending" }
                                    }
                                }
                            }
                            form method="post" action={ "/classes/" (class.id) "/delete" } {
                                button.icon-button.delete type="submit" title="Delete class" { "✕" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Assignment entry form. The submit button starts disabled and is enabled
/// by the embedded script once all three fields are populated.
fn render_assignment_form(planner: &Planner) -> Markup {
    html! {
        div.panel {
            h2 { "Add assignment" }
            @if planner.classes().is_empty() {
                div.empty-state {
                    p { "Please add at least one class before creating assignments." }
                }
            } @else {
                form #"assignment-form" method="post" action="/assignments/add" {
                    label for="assignment-class" { "Select class" }
                    select #"assignment-class" name="class" {
                        option value="" selected[planner.selected_class().is_none()] {
                            "Choose a class..."
                        }
                        @for class in planner.classes() {
                            option
                                value=(class.id)
                                selected[planner.selected_class() == Some(class.id)] {
                                (class.name)
                            }
                        }
                    }
                    label for="assignment-name" { "Assignment name" }
                    input #"assignment-name" type="text" name="name"
                        placeholder="Enter assignment name..." autocomplete="off";
                    label for="assignment-due" { "Due date" }
                    input #"assignment-due" type="date" name="due";
                    button #"assignment-submit" type="submit" disabled { "Add assignment" }
                }
            }
        }
    }
}

const CSS: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;700;900&display=swap');

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
    background: #0a0a0a;
    color: #fff;
    min-height: 100vh;
    line-height: 1.4;
    overflow-x: hidden;
}

body::before {
    content: '';
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    background:
        radial-gradient(circle at 15% 40%, rgba(120,80,255,0.12) 0%, transparent 50%),
        radial-gradient(circle at 85% 75%, rgba(0,255,200,0.10) 0%, transparent 50%);
    pointer-events: none;
    z-index: 0;
}

.container {
    max-width: 1100px;
    margin: 0 auto;
    padding: 40px 24px 60px;
    position: relative;
    z-index: 1;
}

h1 {
    font-weight: 900;
    font-size: 3.5em;
    letter-spacing: -0.03em;
    text-transform: uppercase;
    margin-bottom: 4px;
    text-shadow:
        0 0 12px rgba(120,80,255,0.5),
        3px 3px 0 #7850ff,
        -2px -2px 0 #00ffc8;
}

.stats {
    color: #888;
    font-size: 0.85em;
    font-weight: 700;
    margin-bottom: 40px;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}

.layout {
    display: grid;
    grid-template-columns: 1fr 2fr;
    gap: 28px;
    align-items: start;
}

.sidebar,
.main {
    display: grid;
    gap: 28px;
}

.panel {
    background: rgba(255,255,255,0.03);
    border: 1px solid rgba(255,255,255,0.1);
    padding: 24px;
}

.panel h2 {
    font-weight: 900;
    font-size: 1.1em;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    margin-bottom: 20px;
    text-shadow: 0 0 8px rgba(0,255,200,0.5);
}

.todo-list,
.completed-list {
    display: grid;
    gap: 12px;
}

.todo-item,
.completed-item {
    display: flex;
    align-items: flex-start;
    justify-content: space-between;
    gap: 12px;
    padding: 14px;
    background: rgba(120,80,255,0.08);
    border-left: 3px solid #7850ff;
}

.todo-item.overdue {
    background: rgba(255,60,90,0.10);
    border-left-color: #ff3c5a;
}

.todo-item.overdue .todo-due {
    color: #ff3c5a;
}

.completed-item {
    background: rgba(0,255,200,0.06);
    border-left-color: #00ffc8;
    opacity: 0.7;
}

.todo-name {
    font-weight: 700;
}

.todo-name.done {
    text-decoration: line-through;
    color: #aaa;
}

.todo-class {
    color: #999;
    font-size: 0.85em;
    margin-top: 2px;
}

.todo-due {
    color: #7850ff;
    font-size: 0.85em;
    font-weight: 700;
    margin-top: 4px;
}

.todo-controls {
    display: flex;
    gap: 8px;
}

.icon-button {
    background: none;
    border: 1px solid rgba(255,255,255,0.2);
    color: #ccc;
    width: 28px;
    height: 28px;
    cursor: pointer;
    font-size: 0.9em;
    transition: all 0.15s;
}

.icon-button.complete:hover {
    border-color: #00ffc8;
    color: #00ffc8;
    box-shadow: 0 0 8px rgba(0,255,200,0.4);
}

.icon-button.delete:hover {
    border-color: #ff3c5a;
    color: #ff3c5a;
    box-shadow: 0 0 8px rgba(255,60,90,0.4);
}

.class-form {
    display: flex;
    gap: 10px;
    margin-bottom: 20px;
}

.class-form input {
    flex: 1;
}

.class-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
    gap: 14px;
}

.class-card {
    display: flex;
    align-items: flex-start;
    justify-content: space-between;
    gap: 10px;
    padding: 16px;
    border: 1px solid rgba(255,255,255,0.15);
    transition: border-color 0.15s;
}

.class-card:hover {
    border-color: rgba(120,80,255,0.6);
}

.class-card h3 {
    font-size: 1em;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.05em;
}

.class-counts {
    color: #999;
    font-size: 0.8em;
    margin-top: 6px;
}

.badge {
    display: inline-block;
    margin-left: 8px;
    padding: 2px 8px;
    background: linear-gradient(135deg, #7850ff, #00ffc8);
    color: #000;
    font-weight: 900;
    font-size: 0.85em;
    text-transform: uppercase;
}

#assignment-form {
    display: grid;
    gap: 8px;
}

#assignment-form label {
    color: #888;
    font-size: 0.75em;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    margin-top: 8px;
}

input,
select {
    background: #111;
    border: 1px solid rgba(255,255,255,0.2);
    color: #fff;
    padding: 10px 12px;
    font-family: inherit;
    font-size: 0.9em;
}

input:focus,
select:focus {
    outline: none;
    border-color: #7850ff;
    box-shadow: 0 0 8px rgba(120,80,255,0.4);
}

button[type="submit"]:not(.icon-button) {
    background: linear-gradient(135deg, #7850ff, #00ffc8);
    border: none;
    color: #000;
    font-family: inherit;
    font-weight: 900;
    font-size: 0.85em;
    text-transform: uppercase;
    letter-spacing: 0.08em;
    padding: 12px 18px;
    cursor: pointer;
    margin-top: 10px;
}

button[type="submit"]:not(.icon-button):disabled {
    background: #333;
    color: #777;
    cursor: not-allowed;
}

.empty-state {
    padding: 30px 12px;
    text-align: center;
    color: #666;
    font-size: 0.9em;
    font-style: italic;
}

@media (max-width: 820px) {
    .layout {
        grid-template-columns: 1fr;
    }

    h1 {
        font-size: 2.4em;
    }
}
"#;

const JAVASCRIPT: &str = r#"
// Keep the assignment submit button disabled until the class, name, and
// due date fields are all populated.
const assignmentForm = document.getElementById('assignment-form');
if (assignmentForm) {
    const classField = document.getElementById('assignment-class');
    const nameField = document.getElementById('assignment-name');
    const dueField = document.getElementById('assignment-due');
    const submitButton = document.getElementById('assignment-submit');

    function updateSubmitState() {
        const ready =
            classField.value !== '' &&
            nameField.value.trim() !== '' &&
            dueField.value !== '';
        submitButton.disabled = !ready;
    }

    [classField, nameField, dueField].forEach(field => {
        field.addEventListener('input', updateSubmitState);
        field.addEventListener('change', updateSubmitState);
    });

    updateSubmitState();
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 1, 15)
    }

    #[test]
    fn test_render_empty_planner() {
        let planner = Planner::new();
        let page = render_page(&planner, today()).into_string();

        assert!(page.contains("Studiolo"));
        assert!(page.contains("No pending assignments"));
        assert!(page.contains("No classes added yet"));
        assert!(page.contains("Please add at least one class"));
    }

    #[test]
    fn test_render_pending_assignment() {
        let mut planner = Planner::new();
        let biology = planner.add_class("Biology").unwrap();
        planner
            .add_assignment("Lab report", date(2025, 1, 20), biology)
            .unwrap();

        let page = render_page(&planner, today()).into_string();

        assert!(page.contains("Lab report"));
        assert!(page.contains("Biology"));
        assert!(page.contains("Due: 20 Jan 2025"));
        assert!(!page.contains("No pending assignments"));
    }

    #[test]
    fn test_render_relative_due_dates() {
        let mut planner = Planner::new();
        let biology = planner.add_class("Biology").unwrap();
        planner
            .add_assignment("Due now", today(), biology)
            .unwrap();
        planner
            .add_assignment("Due next", date(2025, 1, 16), biology)
            .unwrap();

        let page = render_page(&planner, today()).into_string();

        assert!(page.contains("Due: Today"));
        assert!(page.contains("Due: Tomorrow"));
    }

    #[test]
    fn test_render_overdue_flag() {
        let mut planner = Planner::new();
        let biology = planner.add_class("Biology").unwrap();
        planner
            .add_assignment("Late", date(2025, 1, 10), biology)
            .unwrap();

        let page = render_page(&planner, today()).into_string();
        assert!(page.contains("todo-item overdue"));
    }

    #[test]
    fn test_render_not_overdue_when_due_today() {
        let mut planner = Planner::new();
        let biology = planner.add_class("Biology").unwrap();
        planner
            .add_assignment("Due now", today(), biology)
            .unwrap();

        let page = render_page(&planner, today()).into_string();
        assert!(!page.contains("todo-item overdue"));
    }

    #[test]
    fn test_completed_panel_hidden_when_empty() {
        let mut planner = Planner::new();
        let biology = planner.add_class("Biology").unwrap();
        planner
            .add_assignment("Open", date(2025, 1, 20), biology)
            .unwrap();

        let page = render_page(&planner, today()).into_string();
        assert!(!page.contains("Completed"));
    }

    #[test]
    fn test_completed_panel_shows_done_assignments() {
        let mut planner = Planner::new();
        let biology = planner.add_class("Biology").unwrap();
        let id = planner
            .add_assignment("Done task", date(2025, 1, 20), biology)
            .unwrap();
        planner.toggle_assignment(id);

        let page = render_page(&planner, today()).into_string();
        assert!(page.contains("Completed"));
        assert!(page.contains("Done task"));
    }

    #[test]
    fn test_class_card_shows_counts_and_badge() {
        let mut planner = Planner::new();
        let biology = planner.add_class("Biology").unwrap();
        planner
            .add_assignment("Open", date(2025, 1, 20), biology)
            .unwrap();

        let page = render_page(&planner, today()).into_string();
        assert!(page.contains("1 total assignments"));
        assert!(page.contains("1 pending"));
    }

    #[test]
    fn test_class_card_badge_hidden_when_nothing_pending() {
        let mut planner = Planner::new();
        planner.add_class("Biology").unwrap();

        let page = render_page(&planner, today()).into_string();
        assert!(page.contains("0 total assignments"));
        assert!(!page.contains("class=\"badge\""));
    }

    #[test]
    fn test_remembered_class_is_preselected() {
        let mut planner = Planner::new();
        let biology = planner.add_class("Biology").unwrap();
        planner.add_class("History").unwrap();
        planner
            .add_assignment("Lab report", date(2025, 1, 20), biology)
            .unwrap();

        let page = render_page(&planner, today()).into_string();
        assert!(page.contains(&format!("value=\"{}\" selected", biology)));
    }

    #[test]
    fn test_item_controls_target_assignment_routes() {
        let mut planner = Planner::new();
        let biology = planner.add_class("Biology").unwrap();
        let id = planner
            .add_assignment("Lab report", date(2025, 1, 20), biology)
            .unwrap();

        let page = render_page(&planner, today()).into_string();
        assert!(page.contains(&format!("/assignments/{}/toggle", id)));
        assert!(page.contains(&format!("/assignments/{}/delete", id)));
        assert!(page.contains(&format!("/classes/{}/delete", biology)));
    }

    #[test]
    fn test_names_are_escaped() {
        let mut planner = Planner::new();
        planner.add_class("<script>alert(1)</script>").unwrap();

        let page = render_page(&planner, today()).into_string();
        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}

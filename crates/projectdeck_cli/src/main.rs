//! Line-oriented shell over one ProjectDeck session.
//!
//! # Responsibility
//! - Drive the form, store and list view from stdin commands.
//! - Print toasts and rendered pages to stdout.
//!
//! Environment:
//! - `PROJECTDECK_LOG_DIR`: absolute directory; enables file logging when set.
//! - `PROJECTDECK_LOG_LEVEL`: log level, defaults per build mode.
//! - `PROJECTDECK_RESET_DELAY_MS`: delay before the form resets after submit.

use log::warn;
use projectdeck_core::{
    core_version, init_logging_from_env, render_dashboard, FormError, FormField,
    LiveProjectList, LogNotifier, Notifier, ProjectForm, ProjectId, Route, Session, SessionConfig,
};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const HELP: &str = "\
commands:
  set <name|description|due|priority|team> <value>   edit the draft (empty value clears)
  draft                                              show the draft
  submit                                             create the project
  list                                               show the project list
  get <id>                                           show one project as JSON
  json                                               dump all projects as JSON
  goto <path>                                        navigate (/, /projects, /create-project)
  back                                               go to the previous page
  help | quit";

fn main() -> ExitCode {
    if let Err(err) = init_logging_from_env() {
        eprintln!("logging disabled: {err}");
    }

    let config = match SessionConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    println!("projectdeck {}  (type `help`)", core_version());
    match run(Session::new(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("io error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(mut session: Session) -> io::Result<()> {
    let mut form = session.new_form();
    let live = session.bind_project_list();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    prompt(&session, &mut stdout)?;
    for line in stdin.lock().lines() {
        let line = line?;
        let (command, rest) = split_command(&line);
        match command {
            "" => {}
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "set" => set_field(&mut form, rest),
            "draft" => print_draft(&form),
            "submit" => submit(&mut session, &mut form, &live),
            "list" => print!("{}", live.view()),
            "get" => get_project(&session, rest),
            "json" => print_json(session.store().projects()),
            "goto" => {
                let route = session.navigate(rest).clone();
                show_page(&session, &form, &live, &route);
            }
            "back" => {
                if session.back() {
                    let route = session.router().current().clone();
                    show_page(&session, &form, &live, &route);
                } else {
                    println!("already at the first page");
                }
            }
            other => println!("unknown command `{other}`; type `help`"),
        }
        prompt(&session, &mut stdout)?;
    }
    Ok(())
}

fn split_command(line: &str) -> (&str, &str) {
    let trimmed = line.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    }
}

fn prompt(session: &Session, stdout: &mut io::Stdout) -> io::Result<()> {
    print!("{}> ", session.router().current());
    stdout.flush()
}

fn set_field(form: &mut ProjectForm, rest: &str) {
    let (name, value) = split_command(rest);
    let Some(field) = FormField::parse(name) else {
        println!("unknown field `{name}`");
        return;
    };
    if let Err(err) = form.set_field(field, value) {
        println!("{err}");
    }
}

fn print_draft(form: &ProjectForm) {
    let draft = form.draft();
    let or_unset = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
    println!("name:        {}", draft.name);
    println!("description: {}", draft.description);
    println!("due:         {}", or_unset(draft.due_date.map(|d| d.to_string())));
    println!("priority:    {}", or_unset(draft.priority.map(|p| p.to_string())));
    println!("team:        {}", or_unset(draft.team.map(|t| t.to_string())));
    println!("[{}]", form.submit_label());
}

fn submit(session: &mut Session, form: &mut ProjectForm, live: &LiveProjectList) {
    let result = session.submit(form);
    flush_toasts(session);
    let pending = match result {
        Ok(pending) => pending,
        Err(FormError::NameRequired) => return,
        Err(err) => {
            println!("{err}");
            return;
        }
    };

    println!("[{}]", form.submit_label());
    std::thread::sleep(pending.delay);
    session.complete(form);
    let route = session.router().current().clone();
    show_page(session, form, live, &route);
}

fn flush_toasts(session: &Session) {
    for toast in session.toasts().drain() {
        let marker = if toast.is_destructive() { "!" } else { "*" };
        println!("{marker} {}: {}", toast.title, toast.description);
        LogNotifier.notify(toast);
    }
}

fn get_project(session: &Session, rest: &str) {
    let id = match rest.parse::<ProjectId>() {
        Ok(id) => id,
        Err(err) => {
            println!("invalid id `{rest}`: {err}");
            return;
        }
    };
    match session.store().get_project(id) {
        Some(project) => print_json(project),
        None => println!("project not found: {id}"),
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(err) => warn!("event=json_dump module=cli status=error error={err}"),
    }
}

fn show_page(session: &Session, form: &ProjectForm, live: &LiveProjectList, route: &Route) {
    match route {
        Route::Home => print!("{}", render_dashboard(session.store().projects())),
        Route::Projects => print!("{}", live.view()),
        Route::CreateProject => print_draft(form),
        Route::NotFound(path) => println!("404: no page at `{path}`"),
    }
}

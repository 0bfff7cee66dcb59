use colored::Colorize;
use glossario::api::{CmdMessage, MessageLevel};
use glossario::model::{SectionReport, SectionStatus};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        print_message(message);
    }
}

/// Info and success go to stdout, warnings and errors to stderr.
pub(super) fn print_message(message: &CmdMessage) {
    match message.level {
        MessageLevel::Info => println!("{}", message.content.dimmed()),
        MessageLevel::Success => println!("{}", message.content.green()),
        MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        MessageLevel::Error => eprintln!("{}", message.content.red()),
    }
}

pub(super) fn print_reports(reports: &[SectionReport]) {
    println!();
    for report in reports {
        println!("{}", format_report(report));
    }
}

fn format_report(report: &SectionReport) -> String {
    let status = match report.status {
        SectionStatus::Rendered => format!("{:<9}", "rendered").as_str().green(),
        SectionStatus::Missing => format!("{:<9}", "missing").as_str().yellow(),
        SectionStatus::Empty => format!("{:<9}", "empty").as_str().yellow(),
    };
    format!(
        "  {:<12} {} cross-links {:>4}  internal-links {:>4}  ids {:>5}",
        report.id, status, report.cross_links, report.internal_links, report.namespaced_ids
    )
}

use reword_core::{AppViewModel, JobPhase, NotificationKind};

pub fn print_banner() {
    println!("reword - transform a webpage and download the result");
    print_help();
}

pub fn print_help() {
    println!("commands:");
    println!("  url <address>     set the webpage URL (required)");
    println!("  prompt <text>     set the transformation instruction");
    println!("  transform         submit the job and start polling");
    println!("  download          save the finished artifact to ./downloads");
    println!("  dismiss           clear the current notification");
    println!("  status            show the current job state");
    println!("  quit              exit");
}

pub fn render(view: &AppViewModel) {
    if let Some(toast) = &view.notification {
        let tag = match toast.kind {
            NotificationKind::Success => "OK",
            NotificationKind::Error => "ERROR",
        };
        match toast.duration_ms {
            Some(ms) => println!("[{tag}] {} (auto-dismisses after {}s)", toast.title, ms / 1000),
            None => println!("[{tag}] {}", toast.title),
        }
    }

    let download = if view.download_enabled {
        "ready"
    } else {
        "disabled"
    };
    if view.derived_file_name.is_empty() {
        println!("{} | download {download}", phase_label(view.phase));
    } else {
        println!(
            "{} | file {} | download {download}",
            phase_label(view.phase),
            view.derived_file_name
        );
    }

    if view.show_inline_error {
        println!("Enter a webpage URL");
    }
}

fn phase_label(phase: JobPhase) -> &'static str {
    match phase {
        JobPhase::Idle => "Idle",
        JobPhase::Validating => "Validating",
        JobPhase::Submitted => "Submitted",
        JobPhase::Polling => "Polling",
        JobPhase::Ready => "Ready",
        JobPhase::Failed => "Failed",
    }
}

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use campus_grid::api::HttpSchoolsApi;
use campus_grid::config::ClientConfig;
use campus_grid::session::{Session, SessionContext};
use campus_grid::wizard::catalog::{choices_for, options_for};
use campus_grid::wizard::review::display_value;
use campus_grid::wizard::{
    Action, Field, MultiField, OnboardingWizard, WizardPhase, WizardState, WizardStep,
    review_sections,
};

const HELP: &str = "\
Commands:
  field=value     set a field (e.g. schoolName=Green Valley)
  +field=value    toggle a multi-select option (e.g. +gradesOffered=Class 1)
  :next / :prev   move between steps
  :gen            generate an admin password
  :show           show/hide the admin password
  :copied         acknowledge that the password was copied
  :edit N         jump back to step N from the review step
  :submit         create the school (review step only)
  :quit           abandon onboarding";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ClientConfig::from_env()?;
    let session = Session::load(&config.storage_path).await?;

    eprintln!("🏫 CampusGrid onboarding v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   API: {}", config.schools_endpoint());
    eprintln!("   Session: {}", config.storage_path.display());
    match session.info() {
        Some(info) => eprintln!(
            "   Group: {}",
            info.display_name
                .as_deref()
                .or(info.group_name.as_deref())
                .unwrap_or("(unnamed)")
        ),
        None => eprintln!("   Group: none"),
    }
    if session.bearer_token().is_none() {
        eprintln!("   Warning: not signed in; submission will fail");
    }
    eprintln!("   Type :help for commands.\n");

    let mut wizard = OnboardingWizard::new(
        Arc::new(HttpSchoolsApi::new(&config)),
        Arc::new(session),
        config.redirect_delay,
    );

    render(wizard.state());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            eprint!("> ");
            continue;
        }

        match line {
            ":quit" => break,
            ":help" => eprintln!("{HELP}"),
            ":next" => {
                let _ = wizard.next();
            }
            ":prev" => wizard.previous(),
            ":gen" => {
                let password = wizard.generate_password().to_string();
                println!("Generated admin password: {password}");
            }
            ":show" => {
                wizard.dispatch(Action::TogglePasswordVisibility);
            }
            ":copied" => {
                wizard.dispatch(Action::CopyAcknowledged);
            }
            ":submit" => match wizard.submit().await {
                Ok(outcome) => {
                    println!("\nSchool created successfully!");
                    if let Some(creds) = &outcome.created.admin_credentials {
                        println!("Admin Credentials:");
                        println!("  Email: {}", creds.email);
                        println!("  Password: {}", wizard.state().form.admin_password);
                        println!("  Login URL: {}", creds.login_url);
                        println!("Please save these credentials securely.");
                    }
                    tokio::time::sleep(outcome.redirect_after).await;
                    break;
                }
                Err(e) => tracing::debug!(error = %e, "Submit returned error"),
            },
            other => {
                if let Some(rest) = other.strip_prefix(":edit ") {
                    match rest.trim().parse().ok().and_then(WizardStep::from_number) {
                        Some(step) => {
                            wizard.dispatch(Action::JumpToStep(step));
                        }
                        None => eprintln!("Unknown step: {rest}"),
                    }
                } else if let Err(message) = apply_assignment(&mut wizard, other) {
                    eprintln!("{message}");
                }
            }
        }

        // Any keypress after "copied" clears the acknowledgement.
        if line != ":copied" && wizard.state().ui.copy_acknowledged {
            wizard.dispatch(Action::CopyAckExpired);
        }

        render(wizard.state());
    }

    Ok(())
}

/// Handle `field=value` and `+field=value`.
fn apply_assignment(wizard: &mut OnboardingWizard, input: &str) -> Result<(), String> {
    let (name, value) = input
        .split_once('=')
        .ok_or_else(|| format!("Unrecognised input: {input} (try :help)"))?;
    let value = value.trim().to_string();

    if let Some(name) = name.trim().strip_prefix('+') {
        let field =
            MultiField::from_name(name).ok_or_else(|| format!("Unknown multi-select: {name}"))?;
        wizard.dispatch(Action::ToggleOption(field, value));
    } else {
        let name = name.trim();
        let field = Field::from_name(name).ok_or_else(|| format!("Unknown field: {name}"))?;
        wizard.dispatch(Action::SetField(field, value));
    }
    Ok(())
}

fn render(state: &WizardState) {
    let step = match state.phase {
        WizardPhase::Editing(step) => step,
        WizardPhase::Submitting => {
            eprintln!("Creating school...");
            return;
        }
        WizardPhase::Succeeded => return,
    };

    println!(
        "\n── Step {} of 7: {} ({}) ──",
        step.number(),
        step.title(),
        step.description()
    );

    if step == WizardStep::Review {
        for section in review_sections(&state.form) {
            println!("{} [:edit {}]", section.title, section.step.number());
            for row in &section.rows {
                println!("  {}: {}", row.label, display_value(&row.value));
            }
        }
    } else {
        for field in Field::ALL.iter().filter(|f| f.step() == step) {
            let value = state.form.get(*field);
            let shown = if field.is_secret() && !state.ui.password_visible && !value.is_empty() {
                "•".repeat(value.chars().count())
            } else {
                value.to_string()
            };
            match choices_for(*field) {
                Some(choices) => println!("  {field} = {shown}   [{}]", choices.join(" | ")),
                None => println!("  {field} = {shown}"),
            }
        }
        for field in MultiField::ALL.iter().filter(|f| f.step() == step) {
            println!(
                "  {field} = {{{}}}   [{}]",
                state.form.options(*field).join(", "),
                options_for(*field).join(" | ")
            );
        }
        if step == WizardStep::AdminCredentials {
            println!("  strength: {} ({}/6)", state.ui.strength.label, state.ui.strength.score);
            if state.ui.copy_acknowledged {
                println!("  copied!");
            }
        }
    }

    if let Some(error) = state.error() {
        println!("! {error}");
    }
    eprint!("> ");
}

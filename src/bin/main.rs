use anyhow::Context;
use tracing_subscriber::EnvFilter;

use socport::{
    guard_authenticated, login_and_route, route_for, ApiClient, Route, SessionStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let api = ApiClient::from_env();
    let mut session = SessionStore::open_default();

    let route = match session.user() {
        Some(user) => route_for(user),
        None => {
            let mut args = std::env::args().skip(1);
            let registration_no = args
                .next()
                .context("usage: socport <registration_no> <password>")?;
            let password = args
                .next()
                .context("usage: socport <registration_no> <password>")?;
            login_and_route(&api, &mut session, &registration_no, &password).await?
        }
    };

    if guard_authenticated(&session).is_some() {
        anyhow::bail!("no session after login");
    }
    let token = session.bearer()?;

    println!("routed to {:?}", route);

    match route {
        Route::StudentDashboard | Route::SocietyDashboard => {
            let stats = api.dashboard_stats(token).await?;
            println!(
                "societies: {}  events: {}  posts: {}  pending: {}",
                stats.societies, stats.events, stats.posts, stats.pending_approvals
            );
            for society in api.active_societies(token).await? {
                println!("- [{}] {}", society.id, society.name);
            }
        }
        Route::AdminDashboard
        | Route::SocietyBoardDashboard
        | Route::RegistrarDashboard
        | Route::ViceChancellorDashboard => {
            for report in api.event_reports(token).await? {
                println!("- [{}] {} ({})", report.id, report.title, report.status);
            }
        }
        Route::Login => unreachable!("guard passed above"),
    }

    Ok(())
}

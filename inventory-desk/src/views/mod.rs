//! Views - one per page of the desk
//!
//! Each view fetches, renders to the terminal, and reports the outcome of
//! mutations as notices. A view only returns an error for what it cannot
//! report itself (missing session, admin-only action, terminal I/O).

mod auth;
mod customers;
mod dashboard;
mod new_sale;
mod products;
mod reports;
mod sales_history;
mod scanner;
mod settings;
mod suppliers;
mod users;

use inventory_client::Route;

use crate::cli::Command;
use crate::context::AppContext;
use crate::error::DeskResult;

/// Whether the shell keeps reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub async fn run(ctx: &mut AppContext, command: Command) -> DeskResult<Flow> {
    match command {
        Command::Login { email, password } => auth::login(ctx, email, password).await?,
        Command::Register { username, email } => auth::register(ctx, username, email).await?,
        Command::Logout => auth::logout(ctx)?,
        Command::Menu => menu(ctx),
        Command::Dashboard => dashboard::show(ctx).await?,
        Command::Products(cmd) => products::run(ctx, cmd).await?,
        Command::Customers(cmd) => customers::run(ctx, cmd).await?,
        Command::Suppliers(cmd) => suppliers::run(ctx, cmd).await?,
        Command::Sales(cmd) => sales_history::run(ctx, cmd).await?,
        Command::NewSale => new_sale::run(ctx).await?,
        Command::Reports(args) => reports::show(ctx, args).await?,
        Command::Scan { sku } => scanner::lookup(ctx, &sku).await?,
        Command::Users(cmd) => users::run(ctx, cmd).await?,
        Command::Settings(cmd) => settings::run(ctx, cmd).await?,
        Command::Exit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

/// Navigation for the signed-in role
pub fn menu(ctx: &AppContext) {
    if !ctx.session.is_authenticated() {
        println!("Not signed in. Use `login` or `register`.");
        return;
    }

    let business = ctx
        .session
        .settings()
        .map(|s| s.display_name())
        .unwrap_or(shared::models::DEFAULT_BUSINESS_NAME);
    println!("{} - signed in as {} ({})", business, ctx.username(), ctx.session.role());
    for route in Route::navigation(ctx.session.role()) {
        println!("  {:<16} {}", route.title(), command_hint(route));
    }
    println!("  {:<16} {}", Route::NewSale.title(), command_hint(Route::NewSale));
    println!("  {:<16} {}", Route::Scanner.title(), command_hint(Route::Scanner));
}

fn command_hint(route: Route) -> &'static str {
    match route {
        Route::Login => "login",
        Route::Register => "register",
        Route::Dashboard => "dashboard",
        Route::Products => "products list | low-stock | add | edit | delete | import",
        Route::SalesHistory => "sales list | show | receipt",
        Route::NewSale => "new-sale",
        Route::Scanner => "scan <sku>",
        Route::Settings => "settings show | profile | password | business | factory-reset",
        Route::Reports => "reports [--start] [--end] [--export <dir>]",
        Route::Customers => "customers list | add | edit | delete",
        Route::Suppliers => "suppliers list | add | edit | delete",
        Route::UserManagement => "users list | toggle-role <id>",
    }
}

/// Treat a blank or missing search term as no filter
fn search_term(search: Option<&str>) -> &str {
    search.map(str::trim).unwrap_or_default()
}

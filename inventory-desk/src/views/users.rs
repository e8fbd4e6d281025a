//! User management - list accounts and switch roles

use inventory_client::{Action, Route};

use crate::cli::UsersCommand;
use crate::context::AppContext;
use crate::error::DeskResult;
use crate::notify::Notice;
use crate::render;

pub async fn run(ctx: &mut AppContext, command: UsersCommand) -> DeskResult<()> {
    ctx.require(Route::UserManagement)?;
    match command {
        UsersCommand::List => list(ctx).await,
        UsersCommand::ToggleRole { id } => toggle_role(ctx, id).await,
    }
}

async fn list(ctx: &mut AppContext) -> DeskResult<()> {
    match ctx.client.list_users().await {
        Ok(users) => println!("{}", render::users(&users)),
        Err(e) => Notice::failure(&e, "Failed to fetch users.").emit(),
    }
    Ok(())
}

async fn toggle_role(ctx: &mut AppContext, id: i64) -> DeskResult<()> {
    ctx.ensure(Action::ChangeUserRole)?;
    let users = match ctx.client.list_users().await {
        Ok(users) => users,
        Err(e) => {
            Notice::failure(&e, "Failed to fetch users.").emit();
            return Ok(());
        }
    };
    let Some(user) = users.into_iter().find(|u| u.id == id) else {
        Notice::error(format!("User #{} not found.", id)).emit();
        return Ok(());
    };

    let new_role = user.role.toggled();
    let question = format!(
        "Change the role of '{}' from {} to {}?",
        user.username, user.role, new_role
    );
    if !ctx.prompt.confirm(&question)? {
        return Ok(());
    }

    match ctx.client.update_user_role(user.id, new_role).await {
        Ok(()) => {
            Notice::success(format!("'{}' is now an {}.", user.username, new_role)).emit();
            list(ctx).await?;
        }
        Err(e) => Notice::failure(&e, "Failed to update user role.").emit(),
    }
    Ok(())
}

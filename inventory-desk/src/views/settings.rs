//! Settings - profile, password, business header, factory reset

use inventory_client::{Action, Route};
use shared::models::{BusinessSettings, DEFAULT_BUSINESS_NAME, ProfileUpdate};

use crate::cli::SettingsCommand;
use crate::context::AppContext;
use crate::error::DeskResult;
use crate::notify::Notice;

pub async fn run(ctx: &mut AppContext, command: SettingsCommand) -> DeskResult<()> {
    ctx.require(Route::Settings)?;
    match command {
        SettingsCommand::Show => show(ctx).await,
        SettingsCommand::Profile { username, email } => profile(ctx, username, email).await,
        SettingsCommand::Password => password(ctx).await,
        SettingsCommand::Business {
            name,
            address,
            phone,
        } => business(ctx, name, address, phone).await,
        SettingsCommand::FactoryReset => factory_reset(ctx).await,
    }
}

async fn show(ctx: &mut AppContext) -> DeskResult<()> {
    ctx.refresh_settings().await;
    if let Some(user) = ctx.session.user() {
        println!("Signed in as {} ({})", user.username, user.role);
        if let Some(email) = &user.email {
            println!("  Email: {}", email);
        }
    }
    if ctx.session.token_expired() {
        Notice::warning("Your session has expired. Please log in again.").emit();
    }

    let settings = ctx.session.settings().cloned().unwrap_or_default();
    println!("Business");
    println!("  Name:    {}", settings.name().unwrap_or(DEFAULT_BUSINESS_NAME));
    println!("  Address: {}", settings.address.as_deref().unwrap_or("-"));
    println!("  Phone:   {}", settings.phone.as_deref().unwrap_or("-"));
    Ok(())
}

async fn profile(
    ctx: &mut AppContext,
    username: Option<String>,
    email: Option<String>,
) -> DeskResult<()> {
    let (current_name, current_email) = ctx
        .session
        .user()
        .map(|u| (u.username.clone(), u.email.clone().unwrap_or_default()))
        .unwrap_or_default();

    let username = match username {
        Some(username) => username,
        None => ctx.prompt.ask_or("Username", &current_name)?,
    };
    let email = match email {
        Some(email) => email,
        None => ctx.prompt.ask_or("Email", &current_email)?,
    };

    let update = ProfileUpdate {
        username: username.trim().to_string(),
        email: email.trim().to_string(),
    };
    match ctx.client.update_profile(&update).await {
        Ok(()) => {
            Notice::success("Profile updated! Please log in again to see changes.").emit();
            ctx.sign_out()?;
        }
        Err(e) => Notice::api_error(&e, "Failed to update profile.").emit(),
    }
    Ok(())
}

async fn password(ctx: &mut AppContext) -> DeskResult<()> {
    let old_password = ctx.prompt.ask_secret("Current password")?;
    let new_password = ctx.prompt.ask_secret("New password")?;
    let confirm = ctx.prompt.ask_secret("Confirm new password")?;

    if new_password != confirm {
        Notice::error("New passwords do not match.").emit();
        return Ok(());
    }

    match ctx.client.change_password(&old_password, &new_password).await {
        Ok(()) => Notice::success("Password changed successfully!").emit(),
        Err(e) => Notice::api_error(&e, "Failed to change password.").emit(),
    }
    Ok(())
}

async fn business(
    ctx: &mut AppContext,
    name: Option<String>,
    address: Option<String>,
    phone: Option<String>,
) -> DeskResult<()> {
    ctx.ensure(Action::EditBusinessSettings)?;
    ctx.refresh_settings().await;
    let current = ctx.session.settings().cloned().unwrap_or_default();

    let ask_all = name.is_none() && address.is_none() && phone.is_none();
    let settings = if ask_all {
        BusinessSettings {
            business_name: ctx
                .prompt
                .ask_optional("Business name", current.business_name.as_deref())?,
            address: ctx.prompt.ask_optional("Address", current.address.as_deref())?,
            phone: ctx.prompt.ask_optional("Phone", current.phone.as_deref())?,
        }
    } else {
        BusinessSettings {
            business_name: name.or(current.business_name),
            address: address.or(current.address),
            phone: phone.or(current.phone),
        }
    };

    match ctx.client.update_business_settings(&settings).await {
        Ok(()) => {
            Notice::success("Business settings updated successfully!").emit();
            ctx.session.set_settings(settings);
        }
        Err(e) => Notice::failure(&e, "Failed to update business settings.").emit(),
    }
    Ok(())
}

async fn factory_reset(ctx: &mut AppContext) -> DeskResult<()> {
    ctx.ensure(Action::FactoryReset)?;
    println!("This will permanently delete all products, sales, customers, and suppliers.");
    if !ctx.prompt.confirm("Are you absolutely sure?")? {
        return Ok(());
    }
    let password = ctx
        .prompt
        .ask_secret("This is your final confirmation. Enter your current password")?;

    match ctx.client.factory_reset(&password).await {
        Ok(()) => {
            Notice::success("Factory Reset Successful! Logging out...").emit();
            ctx.sign_out()?;
        }
        Err(e) => Notice::api_error(&e, "Factory reset failed.").emit(),
    }
    Ok(())
}

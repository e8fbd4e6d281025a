//! Login, registration and logout

use inventory_client::RegisterRequest;

use crate::context::AppContext;
use crate::error::DeskResult;
use crate::notify::Notice;

pub async fn login(
    ctx: &mut AppContext,
    email: Option<String>,
    password: Option<String>,
) -> DeskResult<()> {
    let email = match email {
        Some(email) => email,
        None => ctx.prompt.ask("Email")?,
    };
    let password = match password {
        Some(password) => password,
        None => ctx.prompt.ask_secret("Password")?,
    };

    match ctx.client.login(email.trim(), &password).await {
        Ok(response) => {
            ctx.sign_in(response).await?;
            Notice::success(format!("Welcome back, {}!", ctx.username())).emit();
            super::menu(ctx);
        }
        Err(e) => Notice::failure(&e, "Invalid email or password. Please try again.").emit(),
    }
    Ok(())
}

pub async fn register(
    ctx: &mut AppContext,
    username: Option<String>,
    email: Option<String>,
) -> DeskResult<()> {
    let username = match username {
        Some(username) => username,
        None => ctx.prompt.ask("Username")?,
    };
    let email = match email {
        Some(email) => email,
        None => ctx.prompt.ask("Email")?,
    };
    let password = ctx.prompt.ask_secret("Password")?;
    let confirm = ctx.prompt.ask_secret("Confirm password")?;

    if password != confirm {
        Notice::error("Passwords do not match!").emit();
        return Ok(());
    }

    let request = RegisterRequest {
        username: username.trim().to_string(),
        email: email.trim().to_string(),
        password,
    };
    match ctx.client.register(&request).await {
        Ok(()) => Notice::success("Account created. Please log in.").emit(),
        Err(e) => Notice::api_error(&e, "Failed to register. Please try again.").emit(),
    }
    Ok(())
}

pub fn logout(ctx: &mut AppContext) -> DeskResult<()> {
    ctx.sign_out()?;
    Notice::info("Logged out.").emit();
    Ok(())
}

//! Customers

use inventory_client::{Action, Route};
use shared::models::CustomerInput;
use shared::search;

use crate::cli::{ContactFields, CustomersCommand};
use crate::context::AppContext;
use crate::error::DeskResult;
use crate::notify::Notice;
use crate::prompt::Prompt;
use crate::render;

pub async fn run(ctx: &mut AppContext, command: CustomersCommand) -> DeskResult<()> {
    ctx.require(Route::Customers)?;
    match command {
        CustomersCommand::List { search } => list(ctx, search.as_deref()).await,
        CustomersCommand::Add(fields) => {
            ctx.ensure(Action::AddCustomer)?;
            let input = fill_form(&mut ctx.prompt, CustomerInput::default(), &fields, true)?;
            save(ctx, None, input).await
        }
        CustomersCommand::Edit { id, fields } => edit(ctx, id, fields).await,
        CustomersCommand::Delete { id, yes } => delete(ctx, id, yes).await,
    }
}

async fn list(ctx: &mut AppContext, search: Option<&str>) -> DeskResult<()> {
    match ctx.client.list_customers().await {
        Ok(customers) => {
            let shown = search::filter(&customers, super::search_term(search));
            if shown.is_empty() {
                println!("No customers found.");
            } else {
                println!("{}", render::customers(&shown));
            }
        }
        Err(e) => Notice::failure(&e, "Failed to fetch customers.").emit(),
    }
    Ok(())
}

async fn edit(ctx: &mut AppContext, id: i64, fields: ContactFields) -> DeskResult<()> {
    ctx.ensure(Action::EditCustomer)?;
    let customers = match ctx.client.list_customers().await {
        Ok(customers) => customers,
        Err(e) => {
            Notice::failure(&e, "Failed to fetch customers.").emit();
            return Ok(());
        }
    };
    let Some(customer) = customers.iter().find(|c| c.id == id) else {
        Notice::error(format!("Customer #{} not found.", id)).emit();
        return Ok(());
    };

    let ask_all = fields.is_empty();
    let input = fill_form(&mut ctx.prompt, customer.to_input(), &fields, ask_all)?;
    save(ctx, Some(id), input).await
}

async fn save(ctx: &mut AppContext, id: Option<i64>, input: CustomerInput) -> DeskResult<()> {
    if let Err(e) = input.validate() {
        Notice::warning(e.message).emit();
        return Ok(());
    }

    let result = match id {
        Some(id) => ctx.client.update_customer(id, &input).await,
        None => ctx.client.create_customer(&input).await,
    };
    match result {
        Ok(()) => {
            Notice::success(if id.is_some() {
                "Customer updated successfully!"
            } else {
                "Customer added successfully!"
            })
            .emit();
            list(ctx, None).await?;
        }
        Err(e) => Notice::failure(&e, "Failed to save customer. Email might already exist.").emit(),
    }
    Ok(())
}

async fn delete(ctx: &mut AppContext, id: i64, yes: bool) -> DeskResult<()> {
    ctx.ensure(Action::DeleteCustomer)?;
    if !yes
        && !ctx
            .prompt
            .confirm("Are you sure you want to delete this customer?")?
    {
        return Ok(());
    }

    match ctx.client.delete_customer(id).await {
        Ok(()) => {
            Notice::success("Customer deleted successfully!").emit();
            list(ctx, None).await?;
        }
        Err(e) => Notice::failure(&e, "Failed to delete customer.").emit(),
    }
    Ok(())
}

/// Shared with the supplier form, which has the same contact fields
pub(super) fn fill_contact(
    prompt: &mut Prompt,
    fields: &ContactFields,
    ask_missing: bool,
    name: &mut String,
    email: &mut Option<String>,
    phone: &mut Option<String>,
    address: &mut Option<String>,
) -> std::io::Result<()> {
    match &fields.name {
        Some(v) => *name = v.clone(),
        None if ask_missing => *name = prompt.ask_or("Name", name)?,
        None => {}
    }
    for (label, flag, slot) in [
        ("Email", &fields.email, email),
        ("Phone", &fields.phone, phone),
        ("Address", &fields.address, address),
    ] {
        match flag {
            Some(v) => *slot = Some(v.clone()),
            None if ask_missing => *slot = prompt.ask_optional(label, slot.as_deref())?,
            None => {}
        }
    }
    Ok(())
}

fn fill_form(
    prompt: &mut Prompt,
    mut input: CustomerInput,
    fields: &ContactFields,
    ask_missing: bool,
) -> std::io::Result<CustomerInput> {
    fill_contact(
        prompt,
        fields,
        ask_missing,
        &mut input.name,
        &mut input.email,
        &mut input.phone,
        &mut input.address,
    )?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    fn prompt(input: &str) -> Prompt {
        Prompt::new(Cursor::new(input.to_string()), io::sink())
    }

    #[test]
    fn test_add_form() {
        let fields = ContactFields {
            name: Some("Nimal Perera".into()),
            ..Default::default()
        };
        let mut p = prompt("nimal@mail.lk\n\nKandy\n");
        let input = fill_form(&mut p, CustomerInput::default(), &fields, true).unwrap();

        assert_eq!(input.name, "Nimal Perera");
        assert_eq!(input.email.as_deref(), Some("nimal@mail.lk"));
        assert!(input.phone.is_none());
        assert_eq!(input.address.as_deref(), Some("Kandy"));
    }

    #[test]
    fn test_edit_with_flags_changes_only_those() {
        let current = CustomerInput {
            name: "Nimal".into(),
            email: Some("nimal@mail.lk".into()),
            phone: Some("077".into()),
            address: None,
        };
        let fields = ContactFields {
            phone: Some("071".into()),
            ..Default::default()
        };
        let input = fill_form(&mut prompt(""), current.clone(), &fields, false).unwrap();
        assert_eq!(input.phone.as_deref(), Some("071"));
        assert_eq!(input.email, current.email);
        assert!(!fields.is_empty());
        assert!(ContactFields::default().is_empty());
    }
}

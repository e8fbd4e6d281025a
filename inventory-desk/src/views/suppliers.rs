//! Suppliers

use inventory_client::{Action, Route};
use shared::models::SupplierInput;
use shared::search;

use crate::cli::{SupplierFields, SuppliersCommand};
use crate::context::AppContext;
use crate::error::DeskResult;
use crate::notify::Notice;
use crate::prompt::Prompt;
use crate::render;

use super::customers::fill_contact;

pub async fn run(ctx: &mut AppContext, command: SuppliersCommand) -> DeskResult<()> {
    ctx.require(Route::Suppliers)?;
    match command {
        SuppliersCommand::List { search } => list(ctx, search.as_deref()).await,
        SuppliersCommand::Add(fields) => {
            ctx.ensure(Action::AddSupplier)?;
            let input = fill_form(&mut ctx.prompt, SupplierInput::default(), &fields, true)?;
            save(ctx, None, input).await
        }
        SuppliersCommand::Edit { id, fields } => edit(ctx, id, fields).await,
        SuppliersCommand::Delete { id, yes } => delete(ctx, id, yes).await,
    }
}

async fn list(ctx: &mut AppContext, search: Option<&str>) -> DeskResult<()> {
    match ctx.client.list_suppliers().await {
        Ok(suppliers) => {
            let shown = search::filter(&suppliers, super::search_term(search));
            if shown.is_empty() {
                println!("No suppliers found.");
            } else {
                println!("{}", render::suppliers(&shown));
            }
        }
        Err(e) => Notice::failure(&e, "Failed to fetch suppliers.").emit(),
    }
    Ok(())
}

async fn edit(ctx: &mut AppContext, id: i64, fields: SupplierFields) -> DeskResult<()> {
    ctx.ensure(Action::EditSupplier)?;
    let suppliers = match ctx.client.list_suppliers().await {
        Ok(suppliers) => suppliers,
        Err(e) => {
            Notice::failure(&e, "Failed to fetch suppliers.").emit();
            return Ok(());
        }
    };
    let Some(supplier) = suppliers.iter().find(|s| s.id == id) else {
        Notice::error(format!("Supplier #{} not found.", id)).emit();
        return Ok(());
    };

    let ask_all = fields.contact.is_empty() && fields.contact_person.is_none();
    let input = fill_form(&mut ctx.prompt, supplier.to_input(), &fields, ask_all)?;
    save(ctx, Some(id), input).await
}

async fn save(ctx: &mut AppContext, id: Option<i64>, input: SupplierInput) -> DeskResult<()> {
    if let Err(e) = input.validate() {
        Notice::warning(e.message).emit();
        return Ok(());
    }

    let result = match id {
        Some(id) => ctx.client.update_supplier(id, &input).await,
        None => ctx.client.create_supplier(&input).await,
    };
    match result {
        Ok(()) => {
            Notice::success(if id.is_some() {
                "Supplier updated successfully!"
            } else {
                "Supplier added successfully!"
            })
            .emit();
            list(ctx, None).await?;
        }
        Err(e) => Notice::failure(&e, "Failed to save supplier. Email might already exist.").emit(),
    }
    Ok(())
}

async fn delete(ctx: &mut AppContext, id: i64, yes: bool) -> DeskResult<()> {
    ctx.ensure(Action::DeleteSupplier)?;
    if !yes
        && !ctx
            .prompt
            .confirm("Are you sure you want to delete this supplier?")?
    {
        return Ok(());
    }

    match ctx.client.delete_supplier(id).await {
        Ok(()) => {
            Notice::success("Supplier deleted successfully!").emit();
            list(ctx, None).await?;
        }
        Err(e) => Notice::failure(&e, "Failed to delete supplier.").emit(),
    }
    Ok(())
}

fn fill_form(
    prompt: &mut Prompt,
    mut input: SupplierInput,
    fields: &SupplierFields,
    ask_missing: bool,
) -> std::io::Result<SupplierInput> {
    let mut email = Some(input.email).filter(|e| !e.is_empty());
    fill_contact(
        prompt,
        &fields.contact,
        ask_missing,
        &mut input.name,
        &mut email,
        &mut input.phone,
        &mut input.address,
    )?;
    input.email = email.unwrap_or_default();

    match &fields.contact_person {
        Some(person) => input.contact_person = Some(person.clone()),
        None if ask_missing => {
            input.contact_person =
                prompt.ask_optional("Contact person", input.contact_person.as_deref())?
        }
        None => {}
    }
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ContactFields;
    use std::io::{self, Cursor};

    #[test]
    fn test_supplier_form() {
        let fields = SupplierFields {
            contact: ContactFields {
                name: Some("Lanka Traders".into()),
                ..Default::default()
            },
            contact_person: None,
        };
        let mut p = Prompt::new(
            Cursor::new("sales@lanka.lk\n011 222\n\nRuwan\n".to_string()),
            io::sink(),
        );
        let input = fill_form(&mut p, SupplierInput::default(), &fields, true).unwrap();

        assert_eq!(input.name, "Lanka Traders");
        assert_eq!(input.email, "sales@lanka.lk");
        assert_eq!(input.phone.as_deref(), Some("011 222"));
        assert!(input.address.is_none());
        assert_eq!(input.contact_person.as_deref(), Some("Ruwan"));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_missing_email_fails_validation() {
        let fields = SupplierFields {
            contact: ContactFields {
                name: Some("Agro".into()),
                ..Default::default()
            },
            contact_person: None,
        };
        let mut p = Prompt::new(Cursor::new(String::new()), io::sink());
        let input = fill_form(&mut p, SupplierInput::default(), &fields, false).unwrap();
        assert_eq!(input.validate().unwrap_err().message, "email is required");
    }
}

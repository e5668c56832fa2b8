//! Handlers for the well pages.
//!
//! ```text
//! GET       /                  -> index (redirect to /wells)
//! GET       /wells             -> list
//! GET       /create            -> create_form
//! POST      /create            -> create
//! GET       /wells/{id}        -> view
//! GET       /wells/{id}/edit   -> edit_form
//! POST      /wells/{id}/edit   -> update
//! GET|POST  /delete/{id}       -> delete
//! ```
//!
//! Successful writes answer with `303 See Other`.

use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use minijinja::context;
use serde::Deserialize;
use wells_core::error::CoreError;
use wells_core::types::DbId;
use wells_core::well::{
    is_known_status, parse_decimal, parse_drilling_date, parse_well_id, ENTITY_WELL,
    WELL_STATUSES,
};
use wells_db::models::well::{CreateWell, UpdateWell, Well};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Raw well form submission.
///
/// Every field arrives as text and missing fields are empty. Conversion to
/// the store DTOs applies the lenient parsing rules from
/// [`wells_core::well`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WellForm {
    pub name: String,
    pub depth: String,
    pub location: String,
    pub status: String,
    pub productivity: String,
    pub drilling_date: String,
    pub field: String,
    pub operator: String,
}

impl WellForm {
    pub fn into_create(self) -> CreateWell {
        CreateWell {
            depth: parse_decimal(&self.depth),
            productivity: parse_decimal(&self.productivity),
            drilling_date: Some(parse_drilling_date(&self.drilling_date)),
            name: self.name,
            location: self.location,
            status: self.status,
            field: self.field,
            operator: self.operator,
        }
    }

    /// `drilling_date` is ignored: it is not editable after creation.
    pub fn into_update(self) -> UpdateWell {
        UpdateWell {
            depth: parse_decimal(&self.depth),
            productivity: parse_decimal(&self.productivity),
            name: self.name,
            location: self.location,
            status: self.status,
            field: self.field,
            operator: self.operator,
        }
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_WELL,
        id,
    })
}

async fn find_well(state: &AppState, id: DbId) -> AppResult<Well> {
    state.store.find_by_id(id).await?.ok_or_else(|| not_found(id))
}

fn warn_on_unknown_status(status: &str) {
    if !is_known_status(status) {
        tracing::warn!(status, "Storing well with a status outside the form vocabulary");
    }
}

/// GET /
pub async fn index() -> Redirect {
    Redirect::to("/wells")
}

/// GET /wells
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let wells = state.store.list().await?;
    let page = state.templates.render("list.html", context! { wells => wells })?;
    Ok(Html(page))
}

/// GET /wells/{id}
pub async fn view(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_well_id(&raw_id)?;
    let well = find_well(&state, id).await?;
    let page = state.templates.render("view.html", context! { well => well })?;
    Ok(Html(page))
}

/// GET /create
pub async fn create_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    let page = state
        .templates
        .render("create.html", context! { statuses => WELL_STATUSES })?;
    Ok(Html(page))
}

/// POST /create
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<WellForm>,
) -> AppResult<Redirect> {
    let input = form.into_create();
    warn_on_unknown_status(&input.status);

    let well = state.store.create(&input).await?;
    tracing::info!(well_id = well.id, name = %well.name, "Well created");
    Ok(Redirect::to(&format!("/wells/{}", well.id)))
}

/// GET /wells/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_well_id(&raw_id)?;
    let well = find_well(&state, id).await?;
    let page = state.templates.render(
        "edit.html",
        context! { well => well, statuses => WELL_STATUSES },
    )?;
    Ok(Html(page))
}

/// POST /wells/{id}/edit
///
/// Replaces every editable field. Answers 404 when the well does not exist.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(form): Form<WellForm>,
) -> AppResult<Redirect> {
    let id = parse_well_id(&raw_id)?;
    let input = form.into_update();
    warn_on_unknown_status(&input.status);

    if !state.store.update(id, &input).await? {
        return Err(not_found(id));
    }
    tracing::info!(well_id = id, "Well updated");
    Ok(Redirect::to(&format!("/wells/{id}")))
}

/// GET|POST /delete/{id}
///
/// Deleting a well that does not exist is not an error.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Redirect> {
    let id = parse_well_id(&raw_id)?;
    let removed = state.store.delete(id).await?;
    tracing::info!(well_id = id, removed, "Well delete requested");
    Ok(Redirect::to("/wells"))
}

#[cfg(test)]
mod tests {
    use wells_core::well::ZERO_DATE;

    use super::*;

    fn form() -> WellForm {
        WellForm {
            name: "Well-7".into(),
            depth: "150.5".into(),
            location: "Block 4".into(),
            status: "active".into(),
            productivity: "abc".into(),
            drilling_date: "2020-13-45".into(),
            field: "Romashkino".into(),
            operator: "Tatneft".into(),
        }
    }

    #[test]
    fn create_applies_fallbacks() {
        let input = form().into_create();
        assert_eq!(input.name, "Well-7");
        assert_eq!(input.depth, 150.5);
        assert_eq!(input.productivity, 0.0);
        assert_eq!(input.drilling_date, Some(ZERO_DATE));
        assert_eq!(input.field, "Romashkino");
    }

    #[test]
    fn update_keeps_text_fields_verbatim() {
        let mut raw = form();
        raw.location = String::new();
        raw.status = "conservation".into();
        let input = raw.into_update();
        assert_eq!(input.location, "");
        assert_eq!(input.status, "conservation");
        assert_eq!(input.depth, 150.5);
    }

    #[test]
    fn empty_form_is_accepted() {
        let input = WellForm::default().into_create();
        assert_eq!(input.name, "");
        assert_eq!(input.depth, 0.0);
        assert_eq!(input.drilling_date, Some(ZERO_DATE));
    }
}

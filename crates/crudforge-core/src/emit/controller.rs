//! Controller artifact emitter.
//!
//! Emits an axum router plus handlers for the REST surface: list (with the
//! schema-driven name filter), get-by-id, get-by-code, create (201 +
//! Location), update (404 on missing id), and delete, which performs a soft
//! delete per the audit contract. The route segment uses the pluralized name.

use crate::domain::{EntityNames, EntitySchema};
use crate::emit::{GENERATED_NOTICE, SourceWriter};

pub fn emit_controller(schema: &EntitySchema, names: &EntityNames) -> String {
    let mut out = SourceWriter::new();
    let entity = names.pascal();
    let dto = format!("{}Dto", entity);
    let local = names.local();
    let plural = names.plural_local();
    let route = format!("/api/{}", plural);
    let searchable = schema.has_name_property();

    out.line(GENERATED_NOTICE);
    out.blank();
    out.line("use axum::http::{StatusCode, header};");
    if searchable {
        out.line("use axum::extract::{Path, Query, State};");
    } else {
        out.line("use axum::extract::{Path, State};");
    }
    out.line("use axum::response::{IntoResponse, Response};");
    out.line("use axum::routing::get;");
    out.line("use axum::{Json, Router};");
    if searchable {
        out.line("use serde::Deserialize;");
    }
    out.line("use uuid::Uuid;");
    out.blank();
    out.line(format!("use crate::dtos::{};", dto));
    out.line("use crate::error::ApiError;");
    out.line("use crate::state::AppState;");
    out.blank();

    // Router
    out.line(format!(
        "/// REST endpoints for `{}`, mounted under `{}`.",
        entity, route
    ));
    out.line("pub fn routes() -> Router<AppState> {");
    out.line("    Router::new()");
    out.line("        .route(");
    out.line(format!("            \"{}\",", route));
    out.line(format!(
        "            get(list_{}).post(create_{}),",
        plural, local
    ));
    out.line("        )");
    out.line("        .route(");
    out.line(format!("            \"{}/{{id}}\",", route));
    out.line(format!(
        "            get(get_{}_by_id).put(update_{}).delete(delete_{}),",
        local, local, local
    ));
    out.line("        )");
    out.line(format!(
        "        .route(\"{}/code/{{code}}\", get(get_{}_by_code))",
        route, local
    ));
    out.line("}");
    out.blank();

    // List (with optional name filter)
    if searchable {
        out.line("#[derive(Debug, Deserialize)]");
        out.line(format!("struct List{}Query {{", names.plural()));
        out.line("    name: Option<String>,");
        out.line("}");
        out.blank();
        out.line(format!("// GET {}", route));
        out.line(format!("async fn list_{}(", plural));
        out.line("    State(state): State<AppState>,");
        out.line(format!(
            "    Query(query): Query<List{}Query>,",
            names.plural()
        ));
        out.line(format!(") -> Result<Json<Vec<{}>>, ApiError> {{", dto));
        out.line("    if let Some(name) = query.name.filter(|name| !name.is_empty()) {");
        out.line(format!(
            "        let {} = state.{}_service.get_by_name_containing(&name).await?;",
            plural, local
        ));
        out.line(format!("        return Ok(Json({}));", plural));
        out.line("    }");
        out.line(format!(
            "    let {} = state.{}_service.get_all().await?;",
            plural, local
        ));
        out.line(format!("    Ok(Json({}))", plural));
        out.line("}");
    } else {
        out.line(format!("// GET {}", route));
        out.line(format!("async fn list_{}(", plural));
        out.line("    State(state): State<AppState>,");
        out.line(format!(") -> Result<Json<Vec<{}>>, ApiError> {{", dto));
        out.line(format!(
            "    let {} = state.{}_service.get_all().await?;",
            plural, local
        ));
        out.line(format!("    Ok(Json({}))", plural));
        out.line("}");
    }
    out.blank();

    // Get by id
    out.line(format!("// GET {}/{{id}}", route));
    out.line(format!("async fn get_{}_by_id(", local));
    out.line("    State(state): State<AppState>,");
    out.line("    Path(id): Path<Uuid>,");
    out.line(") -> Result<Response, ApiError> {");
    out.line(format!(
        "    match state.{}_service.get_by_id(id).await? {{",
        local
    ));
    out.line(format!(
        "        Some({}) => Ok(Json({}).into_response()),",
        local, local
    ));
    out.line("        None => Ok(StatusCode::NOT_FOUND.into_response()),");
    out.line("    }");
    out.line("}");
    out.blank();

    // Get by code
    out.line(format!("// GET {}/code/{{code}}", route));
    out.line(format!("async fn get_{}_by_code(", local));
    out.line("    State(state): State<AppState>,");
    out.line("    Path(code): Path<String>,");
    out.line(") -> Result<Response, ApiError> {");
    out.line(format!(
        "    match state.{}_service.get_by_code(&code).await? {{",
        local
    ));
    out.line(format!(
        "        Some({}) => Ok(Json({}).into_response()),",
        local, local
    ));
    out.line("        None => Ok(StatusCode::NOT_FOUND.into_response()),");
    out.line("    }");
    out.line("}");
    out.blank();

    // Create
    out.line(format!("// POST {}", route));
    out.line(format!("async fn create_{}(", local));
    out.line("    State(state): State<AppState>,");
    out.line(format!("    Json(dto): Json<{}>,", dto));
    out.line(") -> Result<Response, ApiError> {");
    out.line("    let actor = state.current_actor();");
    out.line(format!(
        "    let created = state.{}_service.create(dto, &actor).await?;",
        local
    ));
    out.line(format!(
        "    let location = format!(\"{}/{{}}\", created.id);",
        route
    ));
    out.line("    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)).into_response())");
    out.line("}");
    out.blank();

    // Update
    out.line(format!("// PUT {}/{{id}}", route));
    out.line(format!("async fn update_{}(", local));
    out.line("    State(state): State<AppState>,");
    out.line("    Path(id): Path<Uuid>,");
    out.line(format!("    Json(mut dto): Json<{}>,", dto));
    out.line(") -> Result<Response, ApiError> {");
    out.line("    dto.id = id;");
    out.line("    let actor = state.current_actor();");
    out.line(format!(
        "    match state.{}_service.update(dto, &actor).await? {{",
        local
    ));
    out.line(format!(
        "        Some({}) => Ok(Json({}).into_response()),",
        local, local
    ));
    out.line("        None => Ok(StatusCode::NOT_FOUND.into_response()),");
    out.line("    }");
    out.line("}");
    out.blank();

    // Delete (soft)
    out.line(format!("// DELETE {}/{{id}} (soft delete)", route));
    out.line(format!("async fn delete_{}(", local));
    out.line("    State(state): State<AppState>,");
    out.line("    Path(id): Path<Uuid>,");
    out.line(") -> Result<Response, ApiError> {");
    out.line("    let actor = state.current_actor();");
    out.line(format!(
        "    if state.{}_service.soft_delete(id, &actor).await? {{",
        local
    ));
    out.line("        Ok(StatusCode::NO_CONTENT.into_response())");
    out.line("    } else {");
    out.line("        Ok(StatusCode::NOT_FOUND.into_response())");
    out.line("    }");
    out.line("}");
    out.finish()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PropertyDefinition, PropertyType};

    fn schema(entity: &str, table: &str, with_name: bool) -> EntitySchema {
        let mut properties = vec![
            PropertyDefinition::new("Code", "code", PropertyType::String).required(),
        ];
        if with_name {
            properties
                .push(PropertyDefinition::new("Name", "name", PropertyType::String).required());
        }
        EntitySchema::new(entity, table, properties).unwrap()
    }

    fn emit(entity: &str, with_name: bool) -> String {
        let schema = schema(entity, &entity.to_lowercase(), with_name);
        emit_controller(&schema, &EntityNames::derive(entity))
    }

    #[test]
    fn route_segment_uses_the_pluralized_name() {
        let source = emit("Mstcategory", false);
        assert!(source.contains("\"/api/mstcategories\""));
        assert!(source.contains("\"/api/mstcategories/{id}\""));
        assert!(source.contains("\"/api/mstcategories/code/{code}\""));
    }

    #[test]
    fn name_filter_appears_only_with_a_name_property() {
        let with = emit("Mstproduct", true);
        let without = emit("Mstproduct", false);
        assert!(with.contains("name: Option<String>,"));
        assert!(with.contains("get_by_name_containing"));
        assert!(!without.contains("Query"));
        assert!(!without.contains("get_by_name_containing"));
    }

    #[test]
    fn present_filter_short_circuits_to_filtered_results() {
        let source = emit("Mstproduct", true);
        let filtered = source.find("get_by_name_containing").unwrap();
        let all = source.find("get_all()").unwrap();
        assert!(filtered < all, "filter branch must come first");
        assert!(source.contains("query.name.filter(|name| !name.is_empty())"));
    }

    #[test]
    fn create_returns_201_with_location() {
        let source = emit("Mstproduct", false);
        assert!(source.contains("StatusCode::CREATED"));
        assert!(source.contains("header::LOCATION"));
        assert!(source.contains("format!(\"/api/mstproducts/{}\", created.id)"));
    }

    #[test]
    fn update_and_delete_map_missing_ids_to_404() {
        let source = emit("Mstproduct", false);
        assert_eq!(source.matches("StatusCode::NOT_FOUND").count(), 4);
    }

    #[test]
    fn delete_endpoint_soft_deletes_and_returns_204() {
        let source = emit("Mstproduct", false);
        assert!(source.contains("soft_delete(id, &actor)"));
        assert!(source.contains("StatusCode::NO_CONTENT"));
    }
}

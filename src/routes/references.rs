//! Listings of the numbered-reference administration area.
//!
//! Every listing builds one query from the request, awaits its result off the
//! async runtime and binds the result to the listing's view. Failures are
//! returned to actix-web as [`ServiceError`] and no view is rendered.

use actix_web::{HttpResponse, Responder, get, web};
use tera::Tera;

use crate::client::QueryTransport;
use crate::dto::references::{PageParams, ViewBinding};
use crate::models::config::ServerConfig;
use crate::pagination::PageLinks;
use crate::routes::{base_context, redirect, render_view};
use crate::services::{ServiceError, references as references_service};

pub const INDEX_VIEW: &str = "references/index.html";
pub const TOOLS_VIEW: &str = "references/tools.html";
pub const SUPPLIERS_VIEW: &str = "references/suppliers.html";
pub const DEFECT_TYPES_VIEW: &str = "references/defect_types.html";
pub const WORKPLACES_VIEW: &str = "references/workplaces.html";

#[get("/")]
pub async fn root() -> impl Responder {
    redirect("/references")
}

#[get("/references")]
pub async fn index(tera: web::Data<Tera>, server_config: web::Data<ServerConfig>) -> impl Responder {
    let context = base_context("index", &server_config.home_url);

    render_view(&tera, &ViewBinding::empty(INDEX_VIEW), context)
}

#[get("/references/tools")]
pub async fn list_tools(
    params: web::Query<PageParams>,
    transport: web::Data<dyn QueryTransport>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ServiceError> {
    let page = params.page();
    let transport = transport.into_inner();

    let tools =
        web::block(move || references_service::list_tools(transport.as_ref(), page)).await??;

    let mut context = base_context("tools", &server_config.home_url);
    context.insert("pages", &PageLinks::from(&tools));

    Ok(render_view(&tera, &ViewBinding::new(TOOLS_VIEW, tools), context))
}

#[get("/references/suppliers")]
pub async fn list_suppliers(
    transport: web::Data<dyn QueryTransport>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ServiceError> {
    let transport = transport.into_inner();

    let suppliers =
        web::block(move || references_service::list_suppliers(transport.as_ref())).await??;

    let context = base_context("suppliers", &server_config.home_url);

    Ok(render_view(&tera, &ViewBinding::new(SUPPLIERS_VIEW, suppliers), context))
}

#[get("/references/defect-types")]
pub async fn list_defect_types(
    transport: web::Data<dyn QueryTransport>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ServiceError> {
    let transport = transport.into_inner();

    let defect_types =
        web::block(move || references_service::list_defect_types(transport.as_ref())).await??;

    let context = base_context("defect_types", &server_config.home_url);

    Ok(render_view(
        &tera,
        &ViewBinding::new(DEFECT_TYPES_VIEW, defect_types),
        context,
    ))
}

#[get("/references/workplaces")]
pub async fn list_workplaces(
    params: web::Query<PageParams>,
    transport: web::Data<dyn QueryTransport>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ServiceError> {
    let page = params.page();
    let transport = transport.into_inner();

    let workplaces =
        web::block(move || references_service::list_workplaces(transport.as_ref(), page))
            .await??;

    let mut context = base_context("workplaces", &server_config.home_url);
    context.insert("pages", &PageLinks::from(&workplaces));

    Ok(render_view(
        &tera,
        &ViewBinding::new(WORKPLACES_VIEW, workplaces),
        context,
    ))
}

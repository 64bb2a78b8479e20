use actix_web::{web, HttpResponse, Responder};
use common::config::DashboardConfig;
use log::debug;

pub async fn process(config: web::Data<DashboardConfig>) -> impl Responder {
    debug!("serving dashboard configuration");
    HttpResponse::Ok().json(config.get_ref())
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use common::config::DashboardConfig;

    use crate::services::dashboard::configure_routes;

    #[actix_web::test]
    async fn returns_the_configured_dashboard() {
        let mut config = DashboardConfig::default();
        config.failures.sync = 0.0;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/config").to_request();
        let body: DashboardConfig = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, config);
    }

    #[actix_web::test]
    async fn uses_camel_case_on_the_wire() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(DashboardConfig::default()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/config").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["assessments"]["defaultSize"], 10);
        assert_eq!(body["targets"]["switchToPaper"], "In Progress");
    }
}

/// Builds the full route tree over the given state, as `main` does.
macro_rules! portfolio_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($state)
                .app_data(crate::tests::support::app_state_builder::admin_authorizer())
                .app_data(crate::shared::api::custom_json_config())
                .app_data(crate::shared::api::custom_query_config())
                .app_data(crate::shared::api::custom_path_config())
                .configure(crate::init_routes),
        )
        .await
    };
}

pub mod support;

use crate::{
    api::{courses, record, sessions, student},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let pages = config.rate_pages_per_min;
    let record_actions = config.rate_record_per_min;

    cfg.service(
        web::scope("/portal")
            .service(
                web::resource("/me")
                    .wrap(build_limiter(pages))
                    .route(web::get().to(student::get_me)),
            )
            .service(
                web::resource("/course")
                    .wrap(build_limiter(pages))
                    .route(web::get().to(courses::list_courses)),
            )
            .service(
                web::resource("/course/{course_id}")
                    .wrap(build_limiter(pages))
                    .route(web::get().to(courses::course_detail)),
            )
            .service(
                web::resource("/course/{course_id}/schedule-grid")
                    .wrap(build_limiter(pages))
                    .route(web::get().to(courses::schedule_grid)),
            )
            .service(
                web::resource("/course/{course_id}/session")
                    .wrap(build_limiter(pages))
                    .route(web::get().to(sessions::list_sessions)),
            )
            .service(
                web::resource("/course/{course_id}/session/{session_id}")
                    .wrap(build_limiter(pages))
                    .route(web::get().to(sessions::session_detail)),
            )
            // the one mutating action gets its own, tighter budget
            .service(
                web::resource("/course/{course_id}/session/{session_id}/record")
                    .wrap(build_limiter(record_actions))
                    .route(web::post().to(record::take_record)),
            ),
    );
}

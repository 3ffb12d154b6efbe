use std::sync::Arc;

use dinnerdate::{
    ENV,
    api::{error, success},
    configs::connect_database,
    modules::{
        friend::handle as friend,
        group::{handle as group, model::CreateGroupModel},
        restaurant::{handle as restaurant, source::FixturePlacesSource},
        user::{handle as user, model::SignUpModel},
    },
    state::AppState,
};

fn report<T: serde::Serialize>(outcome: Result<success::Success<T>, error::Error>) -> Option<T> {
    match outcome {
        Ok(success) => {
            log::info!("{}", success.message_text());
            if let Ok(body) = success.to_json() {
                log::debug!("{body}");
            }
            success.into_data()
        }
        Err(e) => {
            log::warn!("{}", e.message());
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let pool = connect_database().await?;
    let source = Arc::new(FixturePlacesSource::new(ENV.places_fixture.as_str()));
    let state = AppState::from_pool(pool.clone(), source);

    let accounts = [
        SignUpModel::new("JackFrost", "dfhwIof7*", "Jack", "Frost", "JackFrost@hotmail.com"),
        SignUpModel::new("Highlary", "fheuiwF$8", "High", "Lary", "Highlary@gmail.com"),
        SignUpModel::new("LadyInRed", "Crimson#42", "Lady", "InRed", "LadyInRed@me.ca"),
        SignUpModel::new("LoneWolf", "Howl-2night", "Lone", "Wolf", "LoneWolf@yahoo.com"),
    ];
    for account in accounts {
        report(user::sign_up(&state.user_service, account).await);
    }

    for other in ["Highlary", "LadyInRed", "LoneWolf"] {
        report(friend::send_friend_request(&state.friend_service, "JackFrost", other).await);
    }

    if let Some(requests) =
        report(friend::list_friend_requests(&state.friend_service, "Highlary").await)
    {
        log::info!("Highlary has requests from {requests:?}");
    }

    for other in ["Highlary", "LadyInRed", "LoneWolf"] {
        report(friend::accept_friend_request(&state.friend_service, other, "JackFrost").await);
    }

    let body = CreateGroupModel {
        invitees: vec!["Highlary".into(), "LadyInRed".into(), "LoneWolf".into()],
        latitude: 43.47371058300456,
        longitude: -80.52798807621002,
    };
    if let Some(created) = report(group::create_group(&state.group_service, "JackFrost", body).await)
    {
        report(
            restaurant::ingest_restaurants(&state.restaurant_service, created.id, ENV.search_radius)
                .await,
        );
        if let Some(candidates) =
            report(restaurant::list_restaurants(&state.restaurant_service, created.id).await)
        {
            for candidate in candidates {
                log::info!("{:4} {} ({:.1})", candidate.id, candidate.name, candidate.rating);
            }
        }
    }

    pool.close().await;
    Ok(())
}

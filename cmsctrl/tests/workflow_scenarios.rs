use chrono::{
    Duration,
    Utc,
};
use cmsctrl::{
    error::{
        Action,
        CtrlError,
        ScheduleError,
    },
    platform::Builder,
};
use cmscore::{
    ac::Actor,
    workflow::{
        State,
        States,
    },
};
use test_cms::core::{
    MockContentService,
    item,
    scheduled_item,
};

#[async_std::test]
async fn editor_draft_to_review() -> anyhow::Result<()> {
    let mut backend = MockContentService::new();
    backend.expect_get_item()
        .times(1)
        .returning(|id| Ok(item(id, State::Draft, 1)));
    backend.expect_submit_for_review()
        .times(1)
        .returning(|id| Ok(item(id, State::Review, 2)));

    let platform = Builder::new()
        .backend(backend)
        .actor(Actor::editor("bob"))
        .build();
    let ctrl = platform.load_item(1).await?;
    assert_eq!(ctrl.available_actions(), States::only(State::Review));
    ctrl.transition(State::Review).await?;
    assert_eq!(ctrl.status(), State::Review);
    Ok(())
}

#[async_std::test]
async fn admin_draft_publish_now() -> anyhow::Result<()> {
    let mut backend = MockContentService::new();
    backend.expect_publish()
        .times(1)
        .returning(|id| Ok(item(id, State::Published, 2)));

    let platform = Builder::new()
        .backend(backend)
        .actor(Actor::admin("alice"))
        .build();
    let ctrl = platform.ctrl_item(item(2, State::Draft, 1));
    assert_eq!(ctrl.available_actions(), State::Review | State::Published);
    ctrl.transition(State::Published).await?;
    assert_eq!(ctrl.status(), State::Published);
    assert_eq!(ctrl.descriptor().label, "Published");
    Ok(())
}

#[async_std::test]
async fn review_actions_for_both_roles() -> anyhow::Result<()> {
    for actor in [Actor::admin("alice"), Actor::editor("bob")] {
        let platform = Builder::new()
            .backend(MockContentService::new())
            .actor(actor)
            .build();
        let ctrl = platform.ctrl_item(item(3, State::Review, 1));
        assert_eq!(ctrl.available_actions(), State::Draft | State::Published);
    }
    Ok(())
}

#[async_std::test]
async fn published_only_reverts() -> anyhow::Result<()> {
    for actor in [Actor::admin("alice"), Actor::editor("bob")] {
        let mut backend = MockContentService::new();
        backend.expect_schedule_publish().never();
        let platform = Builder::new()
            .backend(backend)
            .actor(actor)
            .build();
        let ctrl = platform.ctrl_item(item(4, State::Published, 1));
        assert_eq!(ctrl.available_actions(), States::only(State::Draft));
        assert!(matches!(
            ctrl.transition(State::Review).await,
            Err(CtrlError::TransitionDenied { .. }),
        ));

        let schedule = ctrl.schedule_ctrl();
        assert!(!schedule.is_active());
        assert!(matches!(
            schedule.schedule(Utc::now() + Duration::hours(1)).await,
            Err(CtrlError::Schedule(ScheduleError::Published)),
        ));
    }
    Ok(())
}

#[async_std::test]
async fn schedule_in_past_makes_no_calls() -> anyhow::Result<()> {
    let existing = Utc::now() + Duration::days(2);
    let mut backend = MockContentService::new();
    backend.expect_schedule_publish().never();

    let platform = Builder::new()
        .backend(backend)
        .actor(Actor::editor("bob"))
        .build();
    let ctrl = platform.ctrl_item(scheduled_item(5, State::Draft, 1, existing));
    let schedule = ctrl.schedule_ctrl();
    assert!(matches!(
        schedule.schedule(Utc::now() - Duration::seconds(1)).await,
        Err(CtrlError::Schedule(ScheduleError::NotInFuture { .. })),
    ));
    assert_eq!(schedule.scheduled_at(), Some(existing));
    Ok(())
}

#[async_std::test]
async fn schedule_then_cancel() -> anyhow::Result<()> {
    let at = Utc::now() + Duration::hours(1);
    let mut backend = MockContentService::new();
    backend.expect_schedule_publish()
        .times(1)
        .withf(move |id, when| *id == 6 && *when == at)
        .returning(|id, when| Ok(scheduled_item(id, State::Draft, 2, when)));
    backend.expect_cancel_schedule()
        .times(1)
        .returning(|id| Ok(item(id, State::Draft, 3)));

    let platform = Builder::new()
        .backend(backend)
        .actor(Actor::editor("bob"))
        .build();
    let ctrl = platform.ctrl_item(item(6, State::Draft, 1));
    let schedule = ctrl.schedule_ctrl();

    schedule.schedule(at).await?;
    assert_eq!(schedule.scheduled_at(), Some(at));
    assert!(schedule.cancel().await?);
    assert_eq!(schedule.scheduled_at(), None);
    // a second cancel has nothing to do
    assert!(!schedule.cancel().await?);
    Ok(())
}

#[async_std::test]
async fn failure_names_the_action() -> anyhow::Result<()> {
    let mut backend = MockContentService::new();
    backend.expect_unpublish()
        .times(1)
        .returning(|_| Err(test_cms::core::service_failure(403)));

    let platform = Builder::new()
        .backend(backend)
        .actor(Actor::editor("bob"))
        .build();
    let ctrl = platform.ctrl_item(item(7, State::Review, 1));
    let err = ctrl.unpublish().await
        .expect_err("content-service refused");
    assert_eq!(err.failed_action(), Some(Action::Unpublish));
    assert_eq!(
        err.to_string(),
        "unpublish failed: content-service responded with 403: rejected by content-service",
    );
    assert_eq!(ctrl.status(), State::Review);
    Ok(())
}

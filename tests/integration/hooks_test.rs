//! Hook registry and dispatch behaviour through the public API.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

use hookline_core::config::hooks::HooksConfig;
use hookline_core::error::{AppError, ErrorKind};
use hookline_hooks::{HandlerRef, HookHandler, HookRegistry, HookResult};

use crate::helpers::{EventLog, TestRegistry, add_marker_handler};

#[tokio::test(start_paused = true)]
async fn async_handlers_run_one_at_a_time() {
    let registry = TestRegistry::new();
    let log = EventLog::new();

    // The first handler is the slowest; it must still finish before the
    // second one starts.
    add_marker_handler(&registry, "foo", &log, 1, Duration::from_millis(30)).await;
    add_marker_handler(&registry, "foo", &log, 2, Duration::from_millis(20)).await;
    add_marker_handler(&registry, "foo", &log, 3, Duration::from_millis(10)).await;

    let result = registry.run_hook("foo", "x".to_string()).await.unwrap();

    assert_eq!(result, None);
    assert_eq!(
        log.entries(),
        vec!["start1:x", "end1:x", "start2:x", "end2:x", "start3:x", "end3:x"]
    );
}

#[tokio::test]
async fn false_stops_the_chain() {
    let registry = TestRegistry::new();
    let log = EventLog::new();

    let first = log.clone();
    registry
        .add_fn("foo", move |_| {
            first.push("first");
            Ok(Some(json!(false)))
        })
        .await;
    let second = log.clone();
    registry
        .add_fn("foo", move |_| {
            second.push("second");
            Ok(None)
        })
        .await;

    let result = registry.run_hook("foo", String::new()).await.unwrap();
    assert_eq!(result, Some(json!(false)));
    assert_eq!(log.entries(), vec!["first"]);
}

#[tokio::test]
async fn failure_propagates_and_stops_the_chain() {
    let registry = TestRegistry::new();
    let log = EventLog::new();

    let first = log.clone();
    registry
        .add_fn("foo", move |_| {
            first.push("first");
            Err(AppError::handler("Test"))
        })
        .await;
    let second = log.clone();
    registry
        .add_fn("foo", move |_| {
            second.push("second");
            Ok(None)
        })
        .await;

    let err = registry.run_hook("foo", String::new()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Handler);
    assert_eq!(err.message, "Test");
    assert_eq!(log.entries(), vec!["first"]);
}

#[tokio::test]
async fn async_failure_propagates_like_sync_failure() {
    let registry = TestRegistry::new();
    let log = EventLog::new();

    let first = log.clone();
    registry
        .add_fn("foo", move |_| {
            first.push("first");
            Ok(None)
        })
        .await;
    registry
        .add_async("foo", |_| async {
            tokio::task::yield_now().await;
            Err(AppError::handler("rejected"))
        })
        .await;
    let third = log.clone();
    registry
        .add_fn("foo", move |_| {
            third.push("third");
            Ok(Some(json!(3)))
        })
        .await;

    let err = registry.run_hook("foo", String::new()).await.unwrap_err();
    assert_eq!(err.message, "rejected");
    assert_eq!(log.entries(), vec!["first"]);
}

#[tokio::test]
async fn unregistered_hook_resolves_to_none() {
    let registry = TestRegistry::new();
    let result = registry
        .run_hook("neverRegistered", String::new())
        .await
        .unwrap();
    assert_eq!(result, None);
}

#[tokio::test(start_paused = true)]
async fn sync_handler_waits_for_earlier_async_handler() {
    let registry = TestRegistry::new();
    let log = EventLog::new();

    add_marker_handler(&registry, "render", &log, 1, Duration::from_millis(50)).await;
    let sync = log.clone();
    registry
        .add_fn("render", move |arg: &String| {
            sync.push(format!("sync:{arg}"));
            Ok(Some(Value::String(arg.to_uppercase())))
        })
        .await;

    let result = registry.run_hook("render", "page".to_string()).await.unwrap();
    assert_eq!(result, Some(json!("PAGE")));
    assert_eq!(log.entries(), vec!["start1:page", "end1:page", "sync:page"]);
}

#[tokio::test]
async fn first_answer_wins_and_later_handlers_never_run() {
    let registry = TestRegistry::new();
    let log = EventLog::new();

    for i in 1..=5 {
        let log = log.clone();
        registry
            .add_fn("pick", move |_| {
                log.push(format!("h{i}"));
                if i == 3 { Ok(Some(json!(i))) } else { Ok(None) }
            })
            .await;
    }

    let result = registry.run_hook("pick", String::new()).await.unwrap();
    assert_eq!(result, Some(json!(3)));
    assert_eq!(log.entries(), vec!["h1", "h2", "h3"]);
}

#[tokio::test]
async fn falsy_values_all_stop_the_chain() {
    for stop in [json!(false), json!(null), json!(0), json!([]), json!({}), json!("")] {
        let registry = TestRegistry::new();
        let answer = stop.clone();
        registry
            .add_fn("foo", move |_| Ok(Some(answer.clone())))
            .await;
        registry
            .add_fn("foo", |_| Ok(Some(json!("unreachable"))))
            .await;

        let result = registry.run_hook("foo", String::new()).await.unwrap();
        assert_eq!(result, Some(stop));
    }
}

#[tokio::test]
async fn removing_one_handler_leaves_other_names_alone() {
    let registry = TestRegistry::new();
    let log = EventLog::new();

    let mut handles: Vec<HandlerRef<String, Value>> = Vec::new();
    for name in ["foo", "bar"] {
        for i in 1..=2 {
            let log = log.clone();
            let handle = registry
                .add_fn(name, move |_| {
                    log.push(format!("{name}{i}"));
                    Ok(None)
                })
                .await;
            handles.push(handle);
        }
    }

    // foo1 is registered under "foo" only; removing it from "bar" is a no-op.
    registry.remove_hook("bar", Some(&handles[0])).await;
    registry.remove_hook("foo", Some(&handles[0])).await;

    registry.run_hook("foo", String::new()).await.unwrap();
    registry.run_hook("bar", String::new()).await.unwrap();
    assert_eq!(log.entries(), vec!["foo2", "bar1", "bar2"]);
}

#[tokio::test]
async fn removing_all_handlers_forgets_the_name() {
    let registry = TestRegistry::new();
    registry.add_fn("foo", |_| Ok(Some(json!(1)))).await;
    registry.add_fn("foo", |_| Ok(Some(json!(2)))).await;

    assert_eq!(
        registry.run_hook("foo", String::new()).await.unwrap(),
        Some(json!(1))
    );

    registry.remove_hook("foo", None).await;

    assert!(!registry.has_hooks("foo").await);
    assert_eq!(registry.run_hook("foo", String::new()).await.unwrap(), None);
}

#[tokio::test]
async fn duplicate_registration_runs_twice_and_is_removed_together() {
    let registry = TestRegistry::new();
    let log = EventLog::new();

    let counter = log.clone();
    let handle = registry
        .add_fn("foo", move |_| {
            counter.push("tick");
            Ok(None)
        })
        .await;
    registry.add_hook("foo", handle.clone()).await;

    registry.run_hook("foo", String::new()).await.unwrap();
    assert_eq!(log.entries(), vec!["tick", "tick"]);

    registry.remove_hook("foo", Some(&handle)).await;
    registry.run_hook("foo", String::new()).await.unwrap();
    assert_eq!(log.entries().len(), 2);
}

/// A handler implemented as a type rather than a closure.
struct Prefix {
    prefix: &'static str,
}

#[async_trait]
impl HookHandler<String, String> for Prefix {
    async fn handle(&self, args: &String) -> HookResult<String, AppError> {
        if args.starts_with(self.prefix) {
            Ok(Some(format!("{} matched {}", self.prefix, args)))
        } else {
            Ok(None)
        }
    }

    fn name(&self) -> &str {
        self.prefix
    }
}

#[tokio::test]
async fn trait_handlers_and_closures_share_a_chain() {
    let registry = HookRegistry::<String, String>::new();
    registry
        .add_hook("route", Arc::new(Prefix { prefix: "/api" }))
        .await;
    registry
        .add_hook("route", Arc::new(Prefix { prefix: "/static" }))
        .await;
    registry
        .add_fn("route", |path: &String| Ok(Some(format!("fallback {path}"))))
        .await;

    let api = registry.run_hook("route", "/api/users".to_string()).await;
    let asset = registry.run_hook("route", "/static/app.js".to_string()).await;
    let other = registry.run_hook("route", "/about".to_string()).await;

    assert_eq!(api.unwrap().as_deref(), Some("/api matched /api/users"));
    assert_eq!(asset.unwrap().as_deref(), Some("/static matched /static/app.js"));
    assert_eq!(other.unwrap().as_deref(), Some("fallback /about"));
}

#[tokio::test(start_paused = true)]
async fn independent_dispatches_may_interleave() {
    let registry = Arc::new(TestRegistry::new());
    let log = EventLog::new();

    add_marker_handler(&registry, "a", &log, 1, Duration::from_millis(20)).await;
    add_marker_handler(&registry, "a", &log, 2, Duration::from_millis(20)).await;
    add_marker_handler(&registry, "b", &log, 3, Duration::from_millis(30)).await;

    let (a, b) = tokio::join!(
        registry.run_hook("a", "a".to_string()),
        registry.run_hook("b", "b".to_string())
    );
    assert_eq!(a.unwrap(), None);
    assert_eq!(b.unwrap(), None);

    let entries = log.entries();
    assert_eq!(entries.len(), 6);

    // Within one chain the order is strict.
    let position = |needle: &str| entries.iter().position(|e| e == needle).unwrap();
    assert!(position("end1:a") < position("start2:a"));
    assert!(position("start3:b") < position("end3:b"));
    // The "b" chain started while the "a" chain was still running.
    assert!(position("start3:b") < position("end1:a"));
}

#[tokio::test]
async fn registry_can_be_shared_across_tasks() {
    let registry = Arc::new(TestRegistry::new());
    registry
        .add_fn("echo", |arg: &String| Ok(Some(json!(arg))))
        .await;

    let mut tasks = Vec::new();
    for i in 0..8 {
        let registry = registry.clone();
        tasks.push(tokio::spawn(async move {
            registry.run_hook("echo", format!("task{i}")).await
        }));
    }

    for (i, task) in tasks.into_iter().enumerate() {
        let result = task.await.unwrap().unwrap();
        assert_eq!(result, Some(json!(format!("task{i}"))));
    }
}

#[tokio::test(start_paused = true)]
async fn cancelled_dispatch_reports_abort() {
    let registry = TestRegistry::new();
    let log = EventLog::new();
    add_marker_handler(&registry, "slow", &log, 1, Duration::from_secs(3600)).await;

    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = registry
        .run_hook_cancellable("slow", "x".to_string(), &cancel)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Aborted);
    assert!(log.entries().is_empty());
}

#[tokio::test]
async fn configured_registry_behaves_the_same() {
    let config = HooksConfig {
        cooperative_yield: false,
        slow_handler_warn_ms: 5,
    };
    let registry = TestRegistry::with_config(config);
    assert!(!registry.config().cooperative_yield);

    registry.add_fn("foo", |_| Ok(None)).await;
    registry.add_fn("foo", |_| Ok(Some(json!("done")))).await;

    assert_eq!(
        registry.run_hook("foo", String::new()).await.unwrap(),
        Some(json!("done"))
    );
}

use super::*;
use std::sync::{Arc, Mutex};

fn recorder() -> (Arc<Mutex<Vec<i32>>>, impl Fn(&i32) + Send + Sync + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |v: &i32| sink.lock().unwrap().push(*v))
}

// =============================================================
// Delivery
// =============================================================

#[test]
fn subscribe_delivers_current_value_immediately() {
    let obs = Observable::new(7);
    let (seen, listener) = recorder();
    let _sub = obs.subscribe(listener);
    assert_eq!(*seen.lock().unwrap(), vec![7]);
}

#[test]
fn set_notifies_every_subscriber() {
    let obs = Observable::new(0);
    let (a, la) = recorder();
    let (b, lb) = recorder();
    let _sa = obs.subscribe(la);
    let _sb = obs.subscribe(lb);

    obs.set(5);

    assert_eq!(*a.lock().unwrap(), vec![0, 5]);
    assert_eq!(*b.lock().unwrap(), vec![0, 5]);
    assert_eq!(obs.get(), 5);
}

#[test]
fn update_publishes_modified_copy() {
    let obs = Observable::new(1);
    obs.update(|v| *v += 41);
    assert_eq!(obs.get(), 42);
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn dropping_subscription_stops_delivery() {
    let obs = Observable::new(0);
    let (seen, listener) = recorder();
    let sub = obs.subscribe(listener);
    assert_eq!(obs.subscriber_count(), 1);

    drop(sub);
    obs.set(9);

    assert_eq!(obs.subscriber_count(), 0);
    assert_eq!(*seen.lock().unwrap(), vec![0]);
}

#[test]
fn explicit_unsubscribe_detaches_only_that_listener() {
    let obs = Observable::new(0);
    let (a, la) = recorder();
    let (b, lb) = recorder();
    let sa = obs.subscribe(la);
    let _sb = obs.subscribe(lb);

    sa.unsubscribe();
    obs.set(3);

    assert_eq!(*a.lock().unwrap(), vec![0]);
    assert_eq!(*b.lock().unwrap(), vec![0, 3]);
}

#[test]
fn subscription_outliving_observable_drops_cleanly() {
    let obs = Observable::new(0);
    let (_seen, listener) = recorder();
    let sub = obs.subscribe(listener);
    drop(obs);
    drop(sub);
}

#[test]
fn listener_may_read_observable_during_notification() {
    let obs = Observable::new(0);
    let reader = obs.clone();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = obs.subscribe(move |_| sink.lock().unwrap().push(reader.get()));

    obs.set(11);

    assert_eq!(*seen.lock().unwrap(), vec![0, 11]);
}

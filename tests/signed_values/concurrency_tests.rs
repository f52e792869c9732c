use signed_values::{HmacSha256, SecretKey, SignedValueStore};
use std::sync::{Arc, Mutex};
use std::thread;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn store_is_send_and_sync() {
    assert_send_sync::<SignedValueStore<HmacSha256>>();
    assert_send_sync::<SecretKey>();
}

#[test]
fn independent_stores_share_a_key_across_threads() {
    let key = SecretKey::from("shared-key");

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let key = key.clone();
            thread::spawn(move || {
                let mut sender = SignedValueStore::new(key.clone(), HmacSha256).expect("key");
                sender.set("worker", i.to_string());
                let signed = sender.encode();

                let mut receiver = SignedValueStore::new(key, HmacSha256).expect("key");
                receiver
                    .decode(signed.tag(), signed.payload())
                    .expect("verifies");
                receiver.get("worker").to_string()
            })
        })
        .collect();

    let mut seen: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().expect("thread completes"))
        .collect();
    seen.sort();
    let expected: Vec<String> = (0..8).map(|i: i32| i.to_string()).collect();
    assert_eq!(seen, expected);
}

#[test]
fn shared_instance_behind_mutex() {
    let store = Arc::new(Mutex::new(
        SignedValueStore::new("k1", HmacSha256).expect("key"),
    ));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let mut guard = store.lock().expect("lock not poisoned");
                guard.add("n", i.to_string());
            })
        })
        .collect();
    for h in handles {
        h.join().expect("thread completes");
    }

    let guard = store.lock().expect("lock not poisoned");
    assert_eq!(guard.get_all("n").len(), 4);

    let signed = guard.encode();
    let mut receiver = SignedValueStore::new("k1", HmacSha256).expect("key");
    receiver
        .decode(signed.tag(), signed.payload())
        .expect("verifies");
    assert_eq!(receiver.values(), guard.values());
}

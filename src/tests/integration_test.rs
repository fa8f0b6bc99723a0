use crate::broker::{Registry, SharedRegistry};
use crate::shell::{Command, execute};
use std::sync::{Arc, Mutex};

fn cmd(line: &str) -> Command {
    Command::parse(line).unwrap().unwrap()
}

#[tokio::test]
async fn integration_pubsub_end_to_end() {
    let broker: SharedRegistry = Arc::new(Mutex::new(Registry::new()));

    let mut inbox = {
        let mut registry = broker.lock().unwrap();
        execute(&mut registry, cmd("addUser alice ADMIN")).unwrap();
        execute(&mut registry, cmd("addTopic news alice")).unwrap();
        execute(&mut registry, cmd("addUser bob READER")).unwrap();
        execute(&mut registry, cmd("subscribeTopic news bob")).unwrap();
        registry.attach_client("bob").unwrap()
    };

    let publisher = broker.clone();
    let status = tokio::task::spawn_blocking(move || {
        let mut registry = publisher.lock().unwrap();
        execute(
            &mut registry,
            cmd(r#"publishMessage {"id":"1","topic":"news","text":"hello"}"#),
        )
    })
    .await
    .unwrap()
    .unwrap();
    assert_eq!(status, "Message published to topic news.");

    let delivery = inbox.recv().await.expect("bob did not receive the message");
    assert_eq!(delivery.topic, "news");
    assert_eq!(delivery.text, "hello");
    assert!(inbox.try_recv().is_err());

    let registry = broker.lock().unwrap();
    assert!(registry.topic("news").unwrap().pending().is_empty());
}

#[tokio::test]
async fn integration_only_subscribers_are_notified() {
    let mut registry = Registry::new();
    registry.add_user("alice", "ADMIN").unwrap();
    registry.add_topic("news", "alice").unwrap();
    registry.add_topic("sports", "alice").unwrap();
    registry.add_user("bob", "READER").unwrap();
    registry.add_user("carol", "READER").unwrap();
    registry.subscribe("news", "bob").unwrap();
    registry.subscribe("sports", "carol").unwrap();

    let mut bob = registry.attach_client("bob").unwrap();
    let mut carol = registry.attach_client("carol").unwrap();

    registry
        .publish(r#"{"id":"1","topic":"news","text":"n1"}"#)
        .unwrap();
    registry
        .publish(r#"{"id":"2","topic":"sports","text":"s1"}"#)
        .unwrap();
    registry
        .publish(r#"{"id":"3","topic":"news","text":"n2"}"#)
        .unwrap();

    assert_eq!(bob.recv().await.unwrap().text, "n1");
    assert_eq!(bob.recv().await.unwrap().text, "n2");
    assert!(bob.try_recv().is_err());

    assert_eq!(carol.recv().await.unwrap().message_id, "2");
    assert!(carol.try_recv().is_err());
}

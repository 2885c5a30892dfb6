use super::with_test_host;
use crate::producer::{amqp_url, send_message};
use crate::send_log::SendLog;
use amiquip::{
    Connection, ConsumerMessage, ConsumerOptions, QueueDeclareOptions, QueueDeleteOptions,
};
use std::fs;

#[test]
fn sends_arrive_in_file_order() {
    with_test_host(|host| {
        let queue = "task-emitter-test-order";
        let dir = tempfile::tempdir().unwrap();
        let mut log = SendLog::open_in(dir.path(), queue).unwrap();

        // Two calls means the durable queue is declared twice; the
        // second declaration must succeed silently.
        send_message(host, queue, "first task", &mut log).unwrap();
        send_message(host, queue, "second task", &mut log).unwrap();

        let mut connection = Connection::insecure_open(&amqp_url(host)).unwrap();
        let channel = connection.open_channel(None).unwrap();
        let q = channel
            .queue_declare(
                queue,
                QueueDeclareOptions {
                    durable: true,
                    ..QueueDeclareOptions::default()
                },
            )
            .unwrap();
        let consumer = q.consume(ConsumerOptions::default()).unwrap();

        let mut bodies = Vec::new();
        for message in consumer.receiver().iter().take(2) {
            match message {
                ConsumerMessage::Delivery(delivery) => {
                    bodies.push(String::from_utf8_lossy(&delivery.body).into_owned());
                    consumer.ack(delivery).unwrap();
                }
                other => panic!("consumer ended early: {:?}", other),
            }
        }
        assert_eq!(bodies, vec!["first task", "second task"]);

        let contents = fs::read_to_string(log.path()).unwrap();
        assert_eq!(
            contents.lines().collect::<Vec<_>>(),
            vec!["INFO: [x] Sent first task", "INFO: [x] Sent second task"]
        );

        channel
            .queue_delete(queue, QueueDeleteOptions::default())
            .unwrap();
        connection.close().unwrap();
    })
}

#[test]
fn empty_message_is_still_sent() {
    with_test_host(|host| {
        let queue = "task-emitter-test-empty";
        let dir = tempfile::tempdir().unwrap();
        let mut log = SendLog::open_in(dir.path(), queue).unwrap();

        send_message(host, queue, "", &mut log).unwrap();

        let mut connection = Connection::insecure_open(&amqp_url(host)).unwrap();
        let channel = connection.open_channel(None).unwrap();
        let q = channel
            .queue_declare(
                queue,
                QueueDeclareOptions {
                    durable: true,
                    ..QueueDeclareOptions::default()
                },
            )
            .unwrap();
        let consumer = q.consume(ConsumerOptions::default()).unwrap();
        match consumer.receiver().recv().unwrap() {
            ConsumerMessage::Delivery(delivery) => {
                assert!(delivery.body.is_empty());
                consumer.ack(delivery).unwrap();
            }
            other => panic!("consumer ended early: {:?}", other),
        }

        channel
            .queue_delete(queue, QueueDeleteOptions::default())
            .unwrap();
        connection.close().unwrap();
    })
}

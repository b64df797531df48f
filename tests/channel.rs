mod tests {
    use ambient_composer::channel::{QueueEmpty, QueueFull, SampleQueue};
    use ambient_composer::router::SensorSample;

    #[test]
    fn test_fifo_order() {
        let queue: SampleQueue<4> = SampleQueue::new();
        let sender = queue.sender();
        let receiver = queue.receiver();

        sender.try_send(SensorSample::light(1.0)).unwrap();
        sender.try_send(SensorSample::light(2.0)).unwrap();
        sender.try_send(SensorSample::accelerometer(0.0, 9.8, 0.0)).unwrap();

        assert_eq!(receiver.try_receive().unwrap(), SensorSample::light(1.0));
        assert_eq!(receiver.try_receive().unwrap(), SensorSample::light(2.0));
        assert_eq!(
            receiver.try_receive().unwrap(),
            SensorSample::accelerometer(0.0, 9.8, 0.0)
        );
        assert_eq!(receiver.try_receive(), Err(QueueEmpty));
    }

    #[test]
    fn test_full_queue_returns_sample() {
        let queue: SampleQueue<2> = SampleQueue::new();

        queue.try_send(SensorSample::light(1.0)).unwrap();
        queue.try_send(SensorSample::light(2.0)).unwrap();

        let rejected = SensorSample::light(3.0);
        assert_eq!(
            queue.try_send(rejected.clone()),
            Err(QueueFull(rejected))
        );

        // Draining one slot makes room again
        queue.try_receive().unwrap();
        assert!(queue.try_send(SensorSample::light(3.0)).is_ok());
    }

    #[test]
    fn test_multiple_senders_share_queue() {
        let queue: SampleQueue<4> = SampleQueue::new();
        let a = queue.sender();
        let b = a;

        a.try_send(SensorSample::light(1.0)).unwrap();
        b.try_send(SensorSample::light(2.0)).unwrap();

        assert_eq!(queue.try_receive().unwrap(), SensorSample::light(1.0));
        assert_eq!(queue.try_receive().unwrap(), SensorSample::light(2.0));
    }
}

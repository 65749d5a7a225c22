/// Queues one or more events through `Commands`; they are delivered when the commands apply.
#[macro_export]
macro_rules! spawn {
    ($commands:expr, $($event:expr),+ $(,)?) => {
        $({
            let event = $event;
            $commands.queue(move |w: &mut bevy::prelude::World| {
                w.send_event(event);
            });
        })+
    };
}

#[cfg(test)]
mod main_test {
    use crate::config::Config;
    use crate::library::logger::impl_fake::LoggerFake;
    use crate::library::random::impl_fake::RandomSourceFake;
    use crate::scroll_animation::main::ScrollAnimation;
    use egui::vec2;
    use std::sync::Arc;

    fn mount(random: &RandomSourceFake) -> ScrollAnimation {
        let config = Config::default();
        ScrollAnimation::new(
            &config,
            Arc::new(LoggerFake::new()),
            random,
            vec2(1024.0, 768.0),
        )
    }

    #[test]
    fn test_mount_places_ten_images() {
        let random = RandomSourceFake::new(vec![0.25]);

        let animation = mount(&random);

        assert_eq!(animation.positions().len(), 10);
        assert_eq!(animation.image_props(0).y, 0.25 * (768.0 - 2.0 * 136.0));
        assert_eq!(animation.content_props().opacity, 0.0);
    }

    #[test]
    fn test_scrolling_to_end_reveals_content() {
        let random = RandomSourceFake::new(vec![0.5]);
        let animation = mount(&random);

        animation.scroll_source().emit(1500.0);

        assert_eq!(animation.content_props().opacity, 1.0);
        for i in 0..10 {
            assert_eq!(animation.image_props(i).opacity, 0.0);
        }
    }

    #[test]
    fn test_unmount_releases_scroll_listener() {
        let random = RandomSourceFake::new(vec![0.5]);
        let animation = mount(&random);
        let source = animation.scroll_source().clone();
        assert_eq!(source.listener_count(), 1);

        drop(animation);
        source.emit(750.0);

        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn test_resize_keeps_start_positions() {
        let random = RandomSourceFake::new(vec![0.1, 0.2, 0.3]);
        let mut animation = mount(&random);
        let before = animation.positions().to_vec();

        animation.resize(vec2(640.0, 480.0));

        assert_eq!(animation.positions(), before.as_slice());
        animation.scroll_source().emit(1500.0);
        assert_eq!(animation.image_props(0).x, 640.0 + 200.0);
    }
}

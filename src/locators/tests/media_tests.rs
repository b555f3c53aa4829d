use super::doc;
use crate::extract;
use crate::results::ImageRef;

#[cfg(test)]
mod image_tests {
    use super::*;

    fn images(html: &str) -> Vec<ImageRef> {
        extract(&doc(html)).images
    }

    #[test]
    fn test_dimension_filter_is_an_or() {
        let result = images(
            r#"<img src="/icon.png" width="40" height="40"><img src="/banner.png" width="200" height="10">"#,
        );

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].src, "https://example.com/banner.png");
        assert_eq!(result[0].width, 200);
        assert_eq!(result[0].height, 10);
    }

    #[test]
    fn test_sources_are_filtered() {
        let result = images(
            r#"
            <img src="data:image/gif;base64,R0lGODlhAQABAAAAACw=" width="300" height="300">
            <img src="https://t.example.com/tracking.gif" width="300" height="300">
            <img src="https://ads.example.com/fb-pixel.png" width="300" height="300">
            <img src="hero.jpg" alt="Product shot" title="Hero" width="800" height="400">
            "#,
        );

        assert_eq!(
            result,
            vec![ImageRef {
                src: "https://example.com/landing/hero.jpg".to_string(),
                alt: "Product shot".to_string(),
                title: "Hero".to_string(),
                width: 800,
                height: 400,
            }]
        );
    }

    #[test]
    fn test_rendered_size_overrides_markup() {
        let result = images(
            r#"<img src="/logo.png" width="10" height="10" data-rendered-width="300" data-rendered-height="80">"#,
        );
        assert_eq!(result.len(), 1);
        assert_eq!((result[0].width, result[0].height), (300, 80));
    }

    #[test]
    fn test_lazy_source_used() {
        let result = images(r#"<img data-src="/lazy.jpg" width="640" height="480"><img>"#);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].src, "https://example.com/lazy.jpg");
    }

    #[test]
    fn test_unsized_image_is_dropped() {
        assert!(images(r#"<img src="/hidden-banner.png">"#).is_empty());
    }

    #[test]
    fn test_single_declared_side_decides() {
        let result = images(
            r#"
            <img src="/narrow.png" width="40">
            <img src="/short.png" height="30">
            <img src="/wide.png" width="400">
            <img src="/tall.png" height="300">
            "#,
        );

        let kept: Vec<(&str, u32, u32)> = result
            .iter()
            .map(|image| (image.src.as_str(), image.width, image.height))
            .collect();
        assert_eq!(
            kept,
            vec![
                ("https://example.com/wide.png", 400, 0),
                ("https://example.com/tall.png", 0, 300),
            ]
        );
    }

    #[test]
    fn test_rendered_zero_size_is_dropped() {
        let result = images(
            r#"<img src="/hidden.png" width="600" height="400" data-rendered-width="0" data-rendered-height="0">"#,
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_image_cap() {
        let html: String = (0..25)
            .map(|i| format!(r#"<img src="/gallery/{}.jpg" width="400" height="300">"#, i))
            .collect();
        let result = images(&html);

        assert_eq!(result.len(), 20);
        assert_eq!(result[19].src, "https://example.com/gallery/19.jpg");
    }
}

#[cfg(test)]
mod presence_tests {
    use super::*;

    #[test]
    fn test_plain_page_has_no_flags() {
        let record = extract(&doc("<p>Just text</p>"));
        assert!(!record.has_video);
        assert!(!record.has_form);
        assert!(!record.has_chat);
    }

    #[test]
    fn test_embedded_video_form_and_chat() {
        let record = extract(&doc(
            r#"
            <iframe src="https://www.youtube.com/embed/abc"></iframe>
            <input type="email" name="email">
            <div id="intercom-container"></div>
            "#,
        ));
        assert!(record.has_video);
        assert!(record.has_form);
        assert!(record.has_chat);
    }

    #[test]
    fn test_unrelated_iframe_is_not_video() {
        let record = extract(&doc(r#"<iframe src="https://maps.example.com/embed"></iframe>"#));
        assert!(!record.has_video);
    }
}

//! Caption templates.

use crate::input::Tone;

/// CTA line used when the input lists no CTAs.
pub const DEFAULT_CTA: &str = "Save and share if useful.";

/// Everything a caption is assembled from.
#[derive(Debug, Clone, Copy)]
pub struct CaptionOptions<'a> {
    pub niche: &'a str,
    pub audience: &'a str,
    pub tone: Tone,
    pub pillar: &'a str,
    pub idea: &'a str,
    pub brand_keywords: &'a [String],
    pub offers: &'a [String],
    pub ctas: &'a [String],
    pub hashtags: &'a [String],
}

/// Opening line for a tone.
pub fn tone_hint(tone: Tone) -> &'static str {
    match tone {
        Tone::Friendly => "Friendly and clear tone",
        Tone::Professional => "Professional and concise tone",
        Tone::Humorous => "Playful tone with light humor",
        Tone::Inspirational => "Motivational and inspiring tone",
    }
}

/// Assemble a caption.
///
/// Section order: tone line, hook, value block with three tip bullets,
/// brand keywords, offer (first only), CTA (first, or [`DEFAULT_CTA`]), and
/// the hashtag line. Optional sections are left out entirely when their list
/// is empty. The result is trimmed.
pub fn generate_caption(opts: &CaptionOptions<'_>) -> String {
    let mut out = String::with_capacity(256);
    out.push_str(tone_hint(opts.tone));
    out.push_str("\n\n");

    out.push_str(&format!("Hook: {}\n\n", opts.idea));
    out.push_str(&format!(
        "Value: If you're {} in {}, these {} tips help:\n• Tip 1\n• Tip 2\n• Tip 3\n",
        opts.audience, opts.niche, opts.pillar
    ));

    if !opts.brand_keywords.is_empty() {
        out.push_str(&format!(
            "\nBrand keywords: {}",
            opts.brand_keywords.join(", ")
        ));
    }
    if let Some(offer) = opts.offers.first() {
        out.push_str(&format!("\nOffer: {offer}"));
    }
    let cta = opts.ctas.first().map(String::as_str).unwrap_or(DEFAULT_CTA);
    out.push_str(&format!("\nCTA: {cta}"));

    if !opts.hashtags.is_empty() {
        let tags: Vec<String> = opts
            .hashtags
            .iter()
            .map(|h| format!("#{}", h.replace('#', "")))
            .collect();
        out.push_str("\n\n");
        out.push_str(&tags.join(" "));
    }

    out.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    fn base<'a>(
        keywords: &'a [String],
        offers: &'a [String],
        ctas: &'a [String],
        hashtags: &'a [String],
    ) -> CaptionOptions<'a> {
        CaptionOptions {
            niche: "Yoga",
            audience: "Beginners",
            tone: Tone::Friendly,
            pillar: "Education",
            idea: "Quick Education strategy for Yoga (Reel)",
            brand_keywords: keywords,
            offers,
            ctas,
            hashtags,
        }
    }

    #[test]
    fn full_caption_layout() {
        let keywords = strings(&["calm", "breath"]);
        let offers = strings(&["10% off", "Free class"]);
        let ctas = strings(&["Book now", "Share"]);
        let tags = strings(&["yoga", "#calm"]);
        let caption = generate_caption(&base(&keywords, &offers, &ctas, &tags));
        let expected = "Friendly and clear tone\n\n\
Hook: Quick Education strategy for Yoga (Reel)\n\n\
Value: If you're Beginners in Yoga, these Education tips help:\n\
• Tip 1\n• Tip 2\n• Tip 3\n\n\
Brand keywords: calm, breath\n\
Offer: 10% off\n\
CTA: Book now\n\n\
#yoga #calm";
        assert_eq!(caption, expected);
    }

    #[test]
    fn optional_sections_are_omitted() {
        let caption = generate_caption(&base(&[], &[], &[], &[]));
        assert!(!caption.contains("Brand keywords"));
        assert!(!caption.contains("Offer:"));
        assert!(!caption.contains('#'));
        assert!(caption.ends_with("CTA: Save and share if useful."));
    }

    #[test]
    fn tone_selects_opening_line() {
        for tone in Tone::ALL {
            let caption = generate_caption(&CaptionOptions {
                tone,
                ..base(&[], &[], &[], &[])
            });
            assert!(caption.starts_with(tone_hint(tone)));
        }
        assert_eq!(tone_hint(Tone::Humorous), "Playful tone with light humor");
    }

    #[test]
    fn hashtag_line_closes_caption() {
        let tags = strings(&["a", "b"]);
        let caption = generate_caption(&base(&[], &[], &[], &tags));
        assert!(caption.ends_with("CTA: Save and share if useful.\n\n#a #b"));
    }
}

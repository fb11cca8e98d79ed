use models::testimonial::Testimonial;

/// Landing page carousel copy. The rotating "current" selection is page
/// state, not data; only the list lives server-side.
pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Kesa Madhan",
        event: "Dream Wedding",
        text: "Spaark Elite Events made our wedding absolutely perfect. Every detail was flawless, and they brought our vision to life beyond our wildest dreams.",
        rating: 5,
    },
    Testimonial {
        name: "Kakunuri Nagarjuna",
        event: "Corporate Gala",
        text: "Professional, creative, and incredibly organized. Our annual gala was a huge success thanks to their exceptional planning and execution.",
        rating: 5,
    },
    Testimonial {
        name: "Thota Karthik",
        event: "Anniversary Celebration",
        text: "They turned our 25th anniversary into a magical evening. The attention to detail and personal touch made it truly unforgettable.",
        rating: 5,
    },
];

pub fn all() -> &'static [Testimonial] {
    &TESTIMONIALS
}

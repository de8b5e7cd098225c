use super::{Entry, MissingPolicy, Registry};

#[derive(Debug, PartialEq, Eq)]
pub struct TopicEntry {
    pub id: &'static str,
    pub title: &'static str,
    /// Paragraphs separated by blank lines.
    pub description: &'static str,
    pub closing_text: &'static str,
    pub images: &'static [TopicImage],
    pub card: TopicCard,
}

#[derive(Debug, PartialEq, Eq)]
pub struct TopicImage {
    pub src: &'static str,
    pub caption: &'static str,
}

/// What the misc list shows for a topic.
#[derive(Debug, PartialEq, Eq)]
pub struct TopicCard {
    pub summary: &'static str,
    pub preview: TopicImage,
    pub bullets_label: &'static str,
    pub bullets: &'static [&'static str],
}

impl Entry for TopicEntry {
    fn id(&self) -> &'static str {
        self.id
    }

    fn title(&self) -> &'static str {
        self.title
    }
}

/// Misc topics. Unknown ids fall back to the first topic.
pub static TOPICS: Registry<TopicEntry> = Registry::new(
    "topics",
    MissingPolicy::FirstEntry,
    &[
        TopicEntry {
            id: "ion-trap-humor",
            title: "Lighter Side of Quantum Physics",
            description: "Quantum physics may be a serious scientific endeavor, but that doesn't mean we can't find \
                humor in the daily life of quantum researchers.\n\n\
                The quantum physics lab is a place where the unexpected becomes routine. Laser systems mysteriously \
                drift out of alignment minutes before an important demonstration. Quantum states decohere just as \
                you're about to measure them. And let's not forget the classic \"the vacuum chamber was perfect \
                until we tried to use it\" scenario.\n\n\
                Then there's the challenge of explaining your research to non-physicists at family gatherings. \"So \
                you trap... atoms? With light? And they're in two places at once? Maybe I'll just tell Grandma you \
                work with computers.\"\n\n\
                Even the terminology of quantum physics lends itself to humor. We talk about excited states, \
                forbidden transitions, and quantum jumps - all terms that could just as easily apply to a reality TV \
                show as cutting-edge science.",
            closing_text: "This page will continue to be updated with more interesting comics about quantum physics.",
            images: &[
                TopicImage {
                    src: "/images/joke1.png",
                    caption: "Encountering bosons",
                },
                TopicImage {
                    src: "/images/joke2.png",
                    caption: "Schrodinger's cat meme - both laughing and not laughing at quantum physics jokes",
                },
                TopicImage {
                    src: "/images/joke3.jpg",
                    caption: "Helium and alpha particles",
                },
            ],
            card: TopicCard {
                summary: "The world of quantum physics isn't all serious equations and lab work. There's plenty of \
                    room for humor, puns, and the occasional physics joke that might only make sense to those who \
                    have spent time debugging an experiment.",
                preview: TopicImage {
                    src: "/images/joke1.png",
                    caption: "Schrodinger's cat meme - both laughing and not laughing at quantum physics jokes",
                },
                bullets_label: "What you'll find here:",
                bullets: &[
                    "Quantum physics jokes that exist in a superposition of funny and not funny",
                    "Tales of the lab where Murphy's Law meets Schrödinger's Cat",
                    "Puns that would make even the most coherent quantum state decohere",
                    "The lighter moments that keep us going through long hours in the lab",
                ],
            },
        },
        TopicEntry {
            id: "origami",
            title: "Origami: The Art of Paper Folding",
            description: "Origami, the traditional Japanese art of paper folding, has evolved from simple paper \
                cranes to complex mathematical structures and engineering applications. What started as a cultural \
                tradition has become a fascinating intersection of art, mathematics, and science.\n\n\
                The beauty of origami lies in its simplicity - starting with a single sheet of paper and creating \
                intricate designs through a series of precise folds. This process has inspired mathematicians to \
                study the underlying geometry and has led to applications in fields ranging from space engineering \
                to medical devices.\n\n\
                Modern origami artists and mathematicians have developed sophisticated techniques for creating \
                complex structures, from realistic animals to geometric patterns. The mathematical principles behind \
                origami have even found applications in designing deployable structures for space missions and \
                stents for medical use.",
            closing_text: "This page will continue to be updated with more of my origami projects.",
            images: &[
                TopicImage {
                    src: "/images/origami1.jpg",
                    caption: "A complex origami dragon created from a single sheet of paper",
                },
                TopicImage {
                    src: "/images/origami2.jpg",
                    caption: "Geometric origami patterns demonstrating mathematical principles",
                },
                TopicImage {
                    src: "/images/origami3.jpg",
                    caption: "Traditional origami crane with modern interpretation",
                },
            ],
            card: TopicCard {
                summary: "Discover the fascinating intersection of art, mathematics, and engineering through the \
                    ancient Japanese art of paper folding. From simple paper cranes to complex mathematical \
                    structures, origami has evolved into a field with surprising applications in modern technology.",
                preview: TopicImage {
                    src: "/images/origami1.jpg",
                    caption: "A complex origami dragon created from a single sheet of paper",
                },
                bullets_label: "Explore:",
                bullets: &[
                    "The mathematical principles behind paper folding",
                    "Modern applications in engineering and medical devices",
                    "The cultural significance and evolution of origami",
                    "How origami inspires innovation in space technology",
                ],
            },
        },
    ],
);

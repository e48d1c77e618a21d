//! The built-in portfolio.
//!
//! Fixed, ordered set of projects: the set never changes at runtime, so
//! everything here is `'static` data the rest of the engine indexes into.

/// A numeric highlight that counts up when its detail row reveals.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: u32,
    pub unit: &'static str,
}

/// One row of the info section.
#[derive(Debug, Clone, Copy)]
pub struct Detail {
    pub label: &'static str,
    pub text: &'static str,
    pub stat: Option<Stat>,
}

/// One carousel slide: a small block of line art plus a caption.
#[derive(Debug, Clone, Copy)]
pub struct Slide {
    pub caption: &'static str,
    pub art: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub name: &'static str,
    pub headline: &'static str,
    pub location: &'static str,
    pub year: &'static str,
    pub slides: &'static [Slide],
    pub details: &'static [Detail],
    pub story: &'static [&'static str],
}

pub const MASTHEAD_TITLE: &str = "VITRINE";
pub const MASTHEAD_TAGLINE: &str = "an architecture portfolio, issue no. 1";

pub const PROJECT_COUNT: usize = 6;

#[must_use]
pub fn projects() -> &'static [Project; PROJECT_COUNT] {
    &PROJECTS
}

/// Display names in navigator order.
#[must_use]
pub fn project_names() -> [&'static str; PROJECT_COUNT] {
    [
        PROJECTS[0].name,
        PROJECTS[1].name,
        PROJECTS[2].name,
        PROJECTS[3].name,
        PROJECTS[4].name,
        PROJECTS[5].name,
    ]
}

static PROJECTS: [Project; PROJECT_COUNT] = [
    Project {
        name: "Sky Garden Residence",
        headline: "Terraces that climb toward the light",
        location: "District 2, riverside",
        year: "2021",
        slides: &[
            Slide {
                caption: "Street elevation at dusk",
                art: &[
                    r"  ____________________  ",
                    r" /  ~~~   ~~~   ~~~  \  ",
                    r"|  [==]  [==]  [==]  |  ",
                    r"|  [==]  [==]  [==]  |  ",
                    r"|__|   ||   ||    |__|  ",
                ],
            },
            Slide {
                caption: "Planted balconies, south face",
                art: &[
                    r"   |\/\_  |\/\_  |\/\_  ",
                    r"  _|____|_|____|_|____| ",
                    r" | [] [] | [] [] | []  |",
                    r" |_~~~~__|_~~~~__|_~~~~|",
                    r" |  []   |  []   |  [] |",
                ],
            },
            Slide {
                caption: "Rooftop commons",
                art: &[
                    r"      _ ~ _ ~ _ ~ _    ",
                    r"   __/ \_/ \_/ \_/ \__ ",
                    r"  |  o   o   o   o    |",
                    r"  |___________________|",
                    r"       ||       ||     ",
                ],
            },
        ],
        details: &[
            Detail {
                label: "Floor area",
                text: "stacked duplex units over a shared podium",
                stat: Some(Stat { value: 4800, unit: "m2" }),
            },
            Detail {
                label: "Terraces",
                text: "one planted terrace per unit, no exceptions",
                stat: Some(Stat { value: 36, unit: "gardens" }),
            },
            Detail {
                label: "Structure",
                text: "cast concrete frame, exposed and board-marked",
                stat: None,
            },
            Detail {
                label: "Build time",
                text: "from groundbreak to first tenants",
                stat: Some(Stat { value: 26, unit: "months" }),
            },
        ],
        story: &[
            "The client asked for a tower; the street asked for a hillside. \
             The building answers both with a stepped section that pulls every \
             apartment back from the one below it, leaving a strip of deep soil \
             at each setback.",
            "Those strips are the project. Irrigation, root barriers, and a \
             gardener's freight lift consumed more design hours than the \
             facades, and the result reads less like balconies with plants \
             than like a terraced orchard that happens to house people.",
            "Five years on, the maintenance logs tell the story we hoped for: \
             residents renew the planting themselves, and the building's \
             east face has disappeared behind jasmine.",
        ],
    },
    Project {
        name: "Riverbend Art Centre",
        headline: "A long roof over changing rooms",
        location: "Old port quarter",
        year: "2019",
        slides: &[
            Slide {
                caption: "Gallery hall, north light",
                art: &[
                    r" ______________________ ",
                    r" \  /\  /\  /\  /\  /\ \",
                    r"  \/  \/  \/  \/  \/  \|",
                    r"  |    .   ..    .    ||",
                    r"  |____________________|",
                ],
            },
            Slide {
                caption: "Entry ramp from the quay",
                art: &[
                    r"            __________  ",
                    r"       ____/         |  ",
                    r"  ____/     o  o     |  ",
                    r" /___________________|  ",
                    r" ~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ~  ",
                ],
            },
            Slide {
                caption: "Workshop wing",
                art: &[
                    r"  ____ ____ ____ ____   ",
                    r" |    |    |    |    |  ",
                    r" | ## | ## | ## | ## |  ",
                    r" |____|____|____|____|  ",
                    r"   ||   ||   ||   ||    ",
                ],
            },
        ],
        details: &[
            Detail {
                label: "Galleries",
                text: "column-free halls under one sawtooth roof",
                stat: Some(Stat { value: 7, unit: "halls" }),
            },
            Detail {
                label: "Roof span",
                text: "timber lattice, prefabricated in three pieces",
                stat: Some(Stat { value: 31, unit: "m" }),
            },
            Detail {
                label: "Daylight",
                text: "north-facing sawtooth glazing, no artificial light before dusk",
                stat: None,
            },
        ],
        story: &[
            "The brief changed four times while the foundations were already \
             in the ground: museum, then school, then both. The only stable \
             decision was the roof, so the roof became the building.",
            "Beneath its sawtooth ridges the plan is deliberately dumb — a \
             row of equal halls that have so far served as galleries, a \
             ceramics school, a wedding, and a boat workshop without moving \
             a single wall.",
        ],
    },
    Project {
        name: "Floating Cafe",
        headline: "Breakfast at water level",
        location: "Lotus lake, west shore",
        year: "2022",
        slides: &[
            Slide {
                caption: "Approach along the pontoon",
                art: &[
                    r"        ___________     ",
                    r"   ____/  o     o  \    ",
                    r"  |________________|    ",
                    r" ~~~\____/~~~\____/~~~~ ",
                    r" ~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ~  ",
                ],
            },
            Slide {
                caption: "Dining room at dawn",
                art: &[
                    r"   _________________    ",
                    r"  /   =    =    =   \   ",
                    r" |  o    o    o    o |  ",
                    r"  \_________________/   ",
                    r" ~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ~  ",
                ],
            },
        ],
        details: &[
            Detail {
                label: "Seats",
                text: "on two pontoons joined by a glazed gangway",
                stat: Some(Stat { value: 64, unit: "seats" }),
            },
            Detail {
                label: "Draft",
                text: "shallow steel hulls, serviced afloat",
                stat: None,
            },
            Detail {
                label: "Assembly",
                text: "towed to site in one night",
                stat: Some(Stat { value: 9, unit: "hours" }),
            },
        ],
        story: &[
            "Nothing about this building touches the lakebed. The kitchen, \
             the dining room, and the herb garden all ride on recycled barge \
             hulls, rising and falling half a metre with the monsoon.",
            "The glazed gangway between the two hulls is hinged at both ends; \
             in a storm it flexes like a wrist. Regulars say you stop \
             noticing the motion after the first coffee.",
        ],
    },
    Project {
        name: "Bamboo Meditation Hall",
        headline: "A grove you can sit inside",
        location: "Hillside monastery",
        year: "2018",
        slides: &[
            Slide {
                caption: "Hall interior, morning",
                art: &[
                    r"   /\      /\      /\   ",
                    r"  /||\    /||\    /||\  ",
                    r" | || |  | || |  | || | ",
                    r" | || |  | || |  | || | ",
                    r" |_||_|__|_||_|__|_||_| ",
                ],
            },
            Slide {
                caption: "Canopy detail",
                art: &[
                    r"  \ \ | / / \ \ | / /   ",
                    r"   \_\|/_/   \_\|/_/    ",
                    r"     |||       |||      ",
                    r"     |||       |||      ",
                    r"    _|||_     _|||_     ",
                ],
            },
            Slide {
                caption: "Path from the gate",
                art: &[
                    r"    . ' . ' . ' . '     ",
                    r"  ' ___ ' ___ ' ___  '  ",
                    r"   |||||  |||||  |||||  ",
                    r"  _|||||__|||||__|||||_ ",
                    r"   ~  ~    ~  ~    ~    ",
                ],
            },
        ],
        details: &[
            Detail {
                label: "Columns",
                text: "bundled culms, harvested within the valley",
                stat: Some(Stat { value: 108, unit: "culms" }),
            },
            Detail {
                label: "Joinery",
                text: "lashed and pinned, no steel plates visible",
                stat: None,
            },
            Detail {
                label: "Raised by",
                text: "monks and volunteers over one dry season",
                stat: Some(Stat { value: 40, unit: "hands" }),
            },
        ],
        story: &[
            "The monastery's old hall burned in an afternoon; the \
             replacement was designed around what the community could build \
             with its own hands. Bamboo was the obvious answer and the hard \
             one — every joint had to be teachable.",
            "The canopy filters light the way the surrounding grove does, \
             and on windy days the whole structure creaks in the same key \
             as the hillside. That was not designed. It was hoped for.",
        ],
    },
    Project {
        name: "Larch Street Townhouse",
        headline: "Four metres wide, endlessly deep",
        location: "Larch street, old town",
        year: "2023",
        slides: &[
            Slide {
                caption: "Street face",
                art: &[
                    r"        ______          ",
                    r"       | [==] |         ",
                    r"       | [==] |         ",
                    r"       |  []  |         ",
                    r"       |__##__|         ",
                ],
            },
            Slide {
                caption: "Light well at mid-plan",
                art: &[
                    r"   ___________________  ",
                    r"  |        __        |  ",
                    r"  |  ___  |  |  ___  |  ",
                    r"  | |   | |::| |   | |  ",
                    r"  |_|___|_|__|_|___|_|  ",
                ],
            },
        ],
        details: &[
            Detail {
                label: "Frontage",
                text: "the narrowest permissible plot on the street",
                stat: Some(Stat { value: 4, unit: "m" }),
            },
            Detail {
                label: "Levels",
                text: "split-level floors around a central light well",
                stat: Some(Stat { value: 6, unit: "half-floors" }),
            },
            Detail {
                label: "Party walls",
                text: "existing masonry retained and exposed",
                stat: None,
            },
        ],
        story: &[
            "Tube houses trade daylight for depth. This one cheats: a \
             light well punched through the middle of the plan drops sun \
             all the way to the kitchen, and the stairs wrap around it in \
             half-level turns so no room is more than four steps from the sky.",
            "From the street it is a polite infill facade. From the inside \
             it is a canyon.",
        ],
    },
    Project {
        name: "Harbor Commons",
        headline: "A market hall that refuses to close",
        location: "Fish quay",
        year: "2020",
        slides: &[
            Slide {
                caption: "Open hall, market day",
                art: &[
                    r"  ____________________  ",
                    r" /____________________\ ",
                    r" |  /\  /\  /\  /\  | | ",
                    r" | |  ||  ||  ||  | | | ",
                    r" |_|__||__||__||__|_|_| ",
                ],
            },
            Slide {
                caption: "Evening, doors folded back",
                art: &[
                    r"  ____________________  ",
                    r" /_______________  ___\ ",
                    r" |* *  * *  * * |/    | ",
                    r" |              /     | ",
                    r" |_____________/______| ",
                ],
            },
            Slide {
                caption: "Quay steps",
                art: &[
                    r"      ________________  ",
                    r" ____|                | ",
                    r" ____|    o   o   o   | ",
                    r" ____|________________| ",
                    r" ~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ~  ",
                ],
            },
        ],
        details: &[
            Detail {
                label: "Stalls",
                text: "reconfigurable bays under one canopy",
                stat: Some(Stat { value: 52, unit: "stalls" }),
            },
            Detail {
                label: "Doors",
                text: "folding timber screens along the full quay side",
                stat: Some(Stat { value: 85, unit: "m" }),
            },
            Detail {
                label: "Programme",
                text: "fish market at dawn, food hall at night",
                stat: None,
            },
        ],
        story: &[
            "The old market closed at noon and the quay died with it. The \
             new hall keeps no hours: its quay-side wall folds away \
             entirely, the stalls roll, and the cleaning regime is built \
             into the floor's fall lines.",
            "City maintenance crews were in the design meetings from week \
             one. It shows in unglamorous places — hose points, drain \
             gratings, a forklift route — and those places are why the \
             building works.",
            "On festival nights the hall holds two thousand people and \
             still smells faintly, honestly, of fish.",
        ],
    },
];

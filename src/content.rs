//! Static text for the educational sidebar and the information tabs.

/// One bullet, optionally with a bold lead-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bullet {
    pub label: Option<&'static str>,
    pub text: &'static str,
}

const fn plain(text: &'static str) -> Bullet {
    Bullet { label: None, text }
}

const fn labelled(label: &'static str, text: &'static str) -> Bullet {
    Bullet {
        label: Some(label),
        text,
    }
}

const PLATE_TECTONICS_BULLETS: &[Bullet] = &[
    plain("Plates move at a rate of a few centimeters per year."),
    plain("Interactions between plates cause earthquakes, volcanoes, and mountain formation."),
    plain("Key types of plate boundaries: divergent, convergent, and transform."),
];

const EARTH_LAYERS_BULLETS: &[Bullet] = &[
    labelled("Crust", "The outermost layer, composed of basalt (oceanic) and granite (continental)."),
    labelled("Mantle", "A silicate-rich layer, constituting about 84% of Earth's volume."),
    labelled("Core", "Divided into the liquid outer core and solid inner core, composed of iron and nickel."),
];

const WEGENER_BULLETS: &[Bullet] = &[
    plain("Evidence includes fossil distribution, matching geological formations, and ancient climate patterns."),
    plain("Wegener's ideas laid the foundation for modern plate tectonics."),
];

const SEISMIC_BULLETS: &[Bullet] = &[
    labelled("Earthquakes", "Occur along fault lines due to the stress accumulation and release between tectonic plates."),
    labelled("Volcanoes", "Formed by the eruption of magma at hotspots or convergent boundaries."),
    plain("Tools like seismographs help detect and measure seismic activities."),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicContent {
    pub title: &'static str,
    /// Heading color
    pub accent: &'static str,
    /// Illustration file name, if the topic has one
    pub image: Option<&'static str>,
    pub body: &'static str,
    pub bullets: &'static [Bullet],
}

/// Topics inside the "Educational Content" sidebar tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EducationTopic {
    #[default]
    Forces,
    Asthenosphere,
    MagneticStripes,
}

impl EducationTopic {
    pub const ALL: [EducationTopic; 3] = [
        EducationTopic::Forces,
        EducationTopic::Asthenosphere,
        EducationTopic::MagneticStripes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Forces => "Forces",
            Self::Asthenosphere => "Asthenosphere",
            Self::MagneticStripes => "Magnetic Stripes",
        }
    }

    /// Button color.
    pub fn accent(self) -> &'static str {
        match self {
            Self::Forces => "#3B82F6",
            Self::Asthenosphere => "#22C55E",
            Self::MagneticStripes => "#A855F7",
        }
    }

    pub fn content(self) -> TopicContent {
        match self {
            Self::Forces => TopicContent {
                title: "Forces Driving Plate Motion",
                accent: "#2563EB",
                image: Some("forces.png"),
                body: "Plate motion is driven by convection currents in the mantle, slab pull at \
                       subduction zones, and ridge push at mid-ocean ridges. Convection cells \
                       circulate molten rock, creating drag forces on the overlying plates.",
                bullets: &[],
            },
            Self::Asthenosphere => TopicContent {
                title: "Asthenosphere and Lithosphere",
                accent: "#16A34A",
                image: Some("asthenosphere.gif"),
                body: "The lithosphere is the rigid outer layer of the Earth, floating atop the \
                       ductile asthenosphere. This softer layer allows tectonic plates to move.",
                bullets: &[],
            },
            Self::MagneticStripes => TopicContent {
                title: "Magnetic Stripes",
                accent: "#9333EA",
                image: Some("magnetic.png"),
                body: "Magnetic stripes on the ocean floor provide evidence for seafloor \
                       spreading. As molten rock rises and solidifies, it records Earth's \
                       magnetic field, forming symmetrical patterns on either side of \
                       mid-ocean ridges.",
                bullets: &[],
            },
        }
    }
}

/// Tabs of the "More Information" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InfoTab {
    #[default]
    PlateTectonics,
    EarthLayers,
    WegenersTheory,
    SeismicActivities,
}

impl InfoTab {
    pub const ALL: [InfoTab; 4] = [
        InfoTab::PlateTectonics,
        InfoTab::EarthLayers,
        InfoTab::WegenersTheory,
        InfoTab::SeismicActivities,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::PlateTectonics => "Plate Tectonics",
            Self::EarthLayers => "Earth's Layers",
            Self::WegenersTheory => "Wegener's Theory",
            Self::SeismicActivities => "Seismic Activities",
        }
    }

    pub fn content(self) -> TopicContent {
        match self {
            Self::PlateTectonics => TopicContent {
                title: "Plate Tectonics",
                accent: "#1F2937",
                image: None,
                body: "Plate tectonics is a scientific theory that explains how major landforms \
                       are created as a result of Earth's subterranean movements. It describes \
                       the movement of Earth's lithospheric plates on the semi-fluid \
                       asthenosphere.",
                bullets: PLATE_TECTONICS_BULLETS,
            },
            Self::EarthLayers => TopicContent {
                title: "Earth's Layers",
                accent: "#1F2937",
                image: None,
                body: "The Earth is composed of several layers, each with unique properties:",
                bullets: EARTH_LAYERS_BULLETS,
            },
            Self::WegenersTheory => TopicContent {
                title: "Wegener's Theory",
                accent: "#1F2937",
                image: None,
                body: "Alfred Wegener proposed the theory of continental drift, suggesting that \
                       continents were once part of a supercontinent called Pangaea.",
                bullets: WEGENER_BULLETS,
            },
            Self::SeismicActivities => TopicContent {
                title: "Seismic Activities",
                accent: "#1F2937",
                image: None,
                body: "Seismic activities are caused by the sudden release of energy within \
                       Earth's crust, often due to plate movements.",
                bullets: SEISMIC_BULLETS,
            },
        }
    }
}

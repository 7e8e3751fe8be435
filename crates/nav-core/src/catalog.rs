use fnv::FnvHashMap;

/// Accent tint for a destination, authored per entry instead of being
/// recovered from free-text theme tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glow {
    Red,
    Blue,
    Yellow,
    Purple,
    Emerald,
    Cyan,
}

impl Glow {
    /// RGB components used by the planet renderer and panel accents.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Glow::Red => [0xef, 0x44, 0x44],
            Glow::Blue => [0x93, 0xc5, 0xfd],
            Glow::Yellow => [0xea, 0xb3, 0x08],
            Glow::Purple => [0xc0, 0x84, 0xfc],
            Glow::Emerald => [0x34, 0xd3, 0x99],
            Glow::Cyan => [0x06, 0xb6, 0xd4],
        }
    }
}

/// Which arrival visualization a destination gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visual {
    /// Shaded, slowly rotating sphere.
    Sphere,
    /// Accretion-disk composition for compact objects.
    Singularity,
}

#[derive(Clone, Debug)]
pub struct Destination {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub distance: &'static str,
    pub description: &'static str,
    pub glow: Glow,
    pub visual: Visual,
}

/// Static destination table. Never mutated at runtime; ids are unique.
pub static DESTINATIONS: &[Destination] = &[
    Destination {
        id: "mars",
        name: "火星 (Mars)",
        kind: "类地行星",
        distance: "0.0000158 光年",
        description: "红色星球。奥林帕斯山的故乡，拥有太阳系最大的火山。是人类殖民的首选目标。",
        glow: Glow::Red,
        visual: Visual::Sphere,
    },
    Destination {
        id: "europa",
        name: "木卫二 (Europa)",
        kind: "冰卫星",
        distance: "0.0000665 光年",
        description: "表面覆盖着厚厚的冰层，冰层下可能存在着巨大的液态海洋，孕育着生命的希望。",
        glow: Glow::Blue,
        visual: Visual::Sphere,
    },
    Destination {
        id: "titan",
        name: "土卫六 (Titan)",
        kind: "卫星",
        distance: "0.00015 光年",
        description: "拥有浓厚的大气层和液态甲烷湖泊。这颗奇异的卫星与早期的地球惊人地相似。",
        glow: Glow::Yellow,
        visual: Visual::Sphere,
    },
    Destination {
        id: "proxima_b",
        name: "比邻星 b (Proxima b)",
        kind: "系外行星",
        distance: "4.24 光年",
        description: "离我们最近的系外行星，位于宜居带内。它是我们恒星际旅行的第一站。",
        glow: Glow::Purple,
        visual: Visual::Sphere,
    },
    Destination {
        id: "kepler_186f",
        name: "开普勒-186f",
        kind: "超级地球",
        distance: "582 光年",
        description: "第一颗在宜居带发现的地球大小的行星。它的红矮星太阳赋予了它永恒的黄昏。",
        glow: Glow::Emerald,
        visual: Visual::Sphere,
    },
    Destination {
        id: "blackhole_cygnus",
        name: "天鹅座 X-1",
        kind: "黑洞",
        distance: "6070 光年",
        description: "一个能够吞噬光线的引力奇点。这里不仅是物理法则的边界，也是勇气的试炼场。",
        glow: Glow::Cyan,
        visual: Visual::Singularity,
    },
];

/// Id-indexed view over [`DESTINATIONS`].
pub struct Catalog {
    index: FnvHashMap<&'static str, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        let mut index = FnvHashMap::default();
        for (i, d) in DESTINATIONS.iter().enumerate() {
            index.insert(d.id, i);
        }
        Self { index }
    }

    pub fn get(&self, id: &str) -> Option<&'static Destination> {
        self.index.get(id).map(|&i| &DESTINATIONS[i])
    }

    pub fn len(&self) -> usize {
        DESTINATIONS.len()
    }

    pub fn is_empty(&self) -> bool {
        DESTINATIONS.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Destination> {
        DESTINATIONS.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

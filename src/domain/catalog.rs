//! The built-in, read-only musician catalog.
//!
//! [`Catalog`] is a `Copy` handle over a `'static` slice, so every handler
//! can hold one without synchronization.

use super::musician::{MusicianFilter, MusicianProfile};

/// Read-only view over a fixed list of [`MusicianProfile`]s.
///
/// Order is fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    profiles: &'static [MusicianProfile],
}

impl Catalog {
    /// Returns the catalog compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            profiles: &PROFILES,
        }
    }

    /// All profiles, in catalog order.
    #[must_use]
    pub const fn profiles(&self) -> &'static [MusicianProfile] {
        self.profiles
    }

    /// Number of profiles.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns `true` if the catalog has no profiles.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Distinct genres in order of first appearance.
    #[must_use]
    pub fn genres(&self) -> Vec<&'static str> {
        let mut genres: Vec<&'static str> = Vec::new();
        for profile in self.profiles {
            if !genres.contains(&profile.genre) {
                genres.push(profile.genre);
            }
        }
        genres
    }

    /// Profiles accepted by `filter`, preserving catalog order.
    #[must_use]
    pub fn search(&self, filter: &MusicianFilter) -> Vec<&'static MusicianProfile> {
        self.profiles.iter().filter(|p| filter.matches(p)).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

static PROFILES: [MusicianProfile; 12] = [
    MusicianProfile {
        name: "Farrokh Bulsara",
        emoji: "🎤",
        genre: "Rock",
        era: "1970s–90s",
        born: "1946, Zanzibar",
        instrument: "Vocals, Piano",
        tagline: "The Greatest Showman of Rock in India",
        bio: "Farrokh Bulsara, known as Freddie Mercury, was the lead vocalist of Queen. Regarded as one of the greatest singers in history, he possessed a four-octave vocal range and a larger-than-life stage presence. His theatrical performances transformed rock concerts into unforgettable spectacles.",
        known_for: &["Bohemian Rhapsody", "We Will Rock You", "Live Aid 1985"],
    },
    MusicianProfile {
        name: "Miles Davis",
        emoji: "🎺",
        genre: "Jazz",
        era: "1940s–90s",
        born: "1926, Illinois",
        instrument: "Trumpet",
        tagline: "The Prince of Darkness",
        bio: "Miles Davis was an American jazz trumpeter widely considered one of the most influential musicians of the 20th century. He pioneered multiple major developments in jazz — bebop, cool jazz, hard bop, and jazz fusion. His album Kind of Blue remains the best-selling jazz record of all time.",
        known_for: &["Kind of Blue", "Bitches Brew", "Birth of the Cool"],
    },
    MusicianProfile {
        name: "Aretha Louise Franklin",
        emoji: "👑",
        genre: "Soul",
        era: "1960s–2010s",
        born: "1942, Memphis",
        instrument: "Vocals, Piano",
        tagline: "The Queen of Soul",
        bio: "Aretha Louise Franklin was an American singer and pianist. The undisputed Queen of Soul, she was the first woman inducted into the Rock and Roll Hall of Fame and won 18 Grammy Awards. Her recording of Respect became an anthem of both the civil rights and women's movements.",
        known_for: &["Respect", "Natural Woman", "Think"],
    },
    MusicianProfile {
        name: "James Marshall Hendrix",
        emoji: "🎸",
        genre: "Rock",
        era: "1960s",
        born: "1942, Seattle",
        instrument: "Electric Guitar",
        tagline: "The Electric Wizard",
        bio: "James Marshall Hendrix was an American guitarist who fundamentally changed what was possible on an electric guitar. His innovative use of feedback, distortion, and whammy-bar techniques created an entirely new sonic language. Despite a career lasting just four years, his influence is incalculable.",
        known_for: &["Purple Haze", "Voodoo Child", "Woodstock 1969"],
    },
    MusicianProfile {
        name: "Johann Sebastian",
        emoji: "🎼",
        genre: "Classical",
        era: "1700s",
        born: "1685, Eisenach",
        instrument: "Organ, Harpsichord",
        tagline: "Father of Western Music",
        bio: "Johann Sebastian Bach was a German composer of the late Baroque period, considered one of the greatest composers of all time. His intricate counterpoint and harmonic language remain unmatched. He composed over 1,000 works. Western music theory is built on the foundations he established.",
        known_for: &["Brandenburg Concertos", "Goldberg Variations", "Mass in B Minor"],
    },
    MusicianProfile {
        name: "David Bowie",
        emoji: "⚡",
        genre: "Rock",
        era: "1970s–2010s",
        born: "1947, London",
        instrument: "Vocals, Guitar",
        tagline: "The Chameleon of Rock",
        bio: "David Bowie was an English singer-songwriter celebrated for his constant reinvention across five decades. From glam-rock Ziggy Stardust to soul-influenced Young Americans, Bowie blurred the boundaries between music, art, and fashion. He remained creatively restless until his final album Blackstar.",
        known_for: &["Heroes", "Space Oddity", "Ziggy Stardust"],
    },
    MusicianProfile {
        name: "Nina Simone",
        emoji: "🎹",
        genre: "Jazz",
        era: "1950s–90s",
        born: "1933, North Carolina",
        instrument: "Piano, Vocals",
        tagline: "The High Priestess of Soul",
        bio: "Nina Simone was an American singer, pianist, and civil rights activist. Her music defied genre, blending jazz, blues, gospel, folk, and classical. Beyond music she was a fierce advocate for racial equality — her songs became anthems of the civil rights movement.",
        known_for: &["Feeling Good", "Strange Fruit", "I Put a Spell on You"],
    },
    MusicianProfile {
        name: "Bob Marley",
        emoji: "🌿",
        genre: "Reggae",
        era: "1970s",
        born: "1945, Jamaica",
        instrument: "Vocals, Guitar",
        tagline: "King of Reggae",
        bio: "Robert Nesta Marley was a Jamaican singer-songwriter who transformed reggae into a worldwide phenomenon. His music carried messages of love, unity, and spiritual freedom rooted in Rastafarian philosophy. He remains one of the best-selling artists of all time.",
        known_for: &["No Woman No Cry", "One Love", "Redemption Song"],
    },
    MusicianProfile {
        name: "Ella Fitzgerald",
        emoji: "🌸",
        genre: "Jazz",
        era: "1930s–90s",
        born: "1917, Virginia",
        instrument: "Vocals",
        tagline: "The First Lady of Song",
        bio: "Ella Fitzgerald was an American jazz vocalist known for her purity of tone, impeccable diction, and near-perfect intonation. Her three-octave vocal range and mastery of scat singing made her one of the most celebrated singers of all time. She won 13 Grammy Awards.",
        known_for: &["Misty", "Summertime", "Scat singing mastery"],
    },
    MusicianProfile {
        name: "Ludwig van Beethoven",
        emoji: "🎻",
        genre: "Classical",
        era: "1800s",
        born: "1770, Bonn",
        instrument: "Piano, Violin",
        tagline: "The Titan of Classical Music",
        bio: "Ludwig van Beethoven was a German composer who bridged the Classical and Romantic eras. Remarkably, he composed many of his greatest works — including the Ninth Symphony — after becoming almost completely deaf. His innovations in structure and harmonic language shaped all music that followed.",
        known_for: &["Symphony No. 9", "Moonlight Sonata", "Fur Elise"],
    },
    MusicianProfile {
        name: "Prince",
        emoji: "💜",
        genre: "Pop/Funk",
        era: "1980s–2010s",
        born: "1958, Minneapolis",
        instrument: "Vocals, Guitar, Piano",
        tagline: "The Purple One",
        bio: "Prince Rogers Nelson was an American musician who defied every category. A genuine multi-instrumentalist, he played every instrument on many recordings. His music fused rock, R&B, funk, pop, and soul with flamboyance and mystique that was entirely his own.",
        known_for: &["Purple Rain", "Sign o the Times", "When Doves Cry"],
    },
    MusicianProfile {
        name: "Johnny Cash",
        emoji: "🖤",
        genre: "Country",
        era: "1950s–2000s",
        born: "1932, Arkansas",
        instrument: "Vocals, Guitar",
        tagline: "The Man in Black",
        bio: "John R. Cash was an American country musician with one of the most distinctive voices in history — a deep, resonant bass-baritone carrying both pain and tenderness. He embodied the struggles of working-class people, earning respect across all genre lines.",
        known_for: &["Ring of Fire", "Hurt (cover)", "Folsom Prison Blues"],
    },
];

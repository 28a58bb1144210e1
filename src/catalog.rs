//! Static game content: tile puzzle artwork and the story reader

use crate::consts::TILE_COUNT;

/// A tile puzzle picture and its nine pieces (asset file names)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleArt {
    pub id: u32,
    pub title: &'static str,
    pub preview: &'static str,
    pub pieces: [&'static str; TILE_COUNT],
}

/// Piece set `n`: p{n}_1.png .. p{n}_9.png
macro_rules! piece_set {
    ($n:literal) => {
        [
            concat!("p", $n, "_1.png"),
            concat!("p", $n, "_2.png"),
            concat!("p", $n, "_3.png"),
            concat!("p", $n, "_4.png"),
            concat!("p", $n, "_5.png"),
            concat!("p", $n, "_6.png"),
            concat!("p", $n, "_7.png"),
            concat!("p", $n, "_8.png"),
            concat!("p", $n, "_9.png"),
        ]
    };
}

macro_rules! puzzle {
    ($id:literal, $pieces:literal) => {
        PuzzleArt {
            id: $id,
            title: concat!("Puzzle ", $id),
            preview: concat!("p", $id, "_full.png"),
            pieces: piece_set!($pieces),
        }
    };
}

/// Puzzles 6..10 reuse earlier piece sets under new previews
pub const PUZZLES: [PuzzleArt; 10] = [
    puzzle!(1, 1),
    puzzle!(2, 2),
    puzzle!(3, 3),
    puzzle!(4, 4),
    puzzle!(5, 5),
    puzzle!(6, 4),
    puzzle!(7, 1),
    puzzle!(8, 2),
    puzzle!(9, 3),
    puzzle!(10, 1),
];

pub fn puzzle(id: u32) -> Option<&'static PuzzleArt> {
    PUZZLES.iter().find(|p| p.id == id)
}

/// A story in the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Story {
    pub id: u32,
    pub title: &'static str,
    pub body: &'static str,
}

pub fn story(id: u32) -> Option<&'static Story> {
    STORIES.iter().find(|s| s.id == id)
}

pub const STORIES: [Story; 10] = [
    Story {
        id: 1,
        title: "The Golden Bull and the Sky Labyrinth",
        body: concat!(
            "Long before grids and arrows ruled the world, the Golden Bull walked freely across the open sky. Clouds shifted beneath his hooves, and direction was a matter of choice, not command. He was a guardian of balance, watching a world where freedom and chaos existed side by side. When the Sky Architects built a labyrinth to control movement itself, the Bull entered willingly, believing no system could truly trap him.\n\n",
            "The moment he reached the center, the labyrinth sealed shut. The sky collapsed into rigid lines, and arrows replaced instinct. Now the Bull stands surrounded by rules instead of clouds, forced to understand the logic of the system he once trusted in order to escape."
        ),
    },
    Story {
        id: 2,
        title: "Escape from the Stone Barn",
        body: concat!(
            "The Stone Barn was carved deep inside the mountains to imprison legends rather than animals. Its walls were unbreakable, but the true prison lay beneath the ground — a grid of arrows that dictated every possible step. When the Golden Bull was led inside, no chains were needed. The floor itself became the cage, silent and absolute.\n\n",
            "At first, the Bull relied on strength and instinct, charging forward without hesitation. Every attempt failed. Slowly, he realized the truth: the barn could not be broken. It could only be solved. Freedom would come not from force, but from understanding the grid beneath his hooves."
        ),
    },
    Story {
        id: 3,
        title: "The Bull Who Challenged Time",
        body: concat!(
            "In this labyrinth, time is not an abstract idea — it is visible and unforgiving. Seconds disappear while the Golden Bull stands motionless, studying the shifting paths around him. Pressure grows heavier with every moment, pushing him toward rushed decisions and careless mistakes.\n\n",
            "The Bull learns that haste only strengthens the grid. Calm thinking weakens it. By choosing carefully and acting with precision, he turns time from an enemy into a tool, reclaiming lost moments with every correct move forward."
        ),
    },
    Story {
        id: 4,
        title: "Heart of the Grid",
        body: concat!(
            "At the exact center of the maze lies a place where every direction feels wrong. The Golden Bull stands there, surrounded by arrows pulling space apart, each promising progress while quietly hiding danger. The grid seems to contradict itself, offering movement but denying escape at every turn.\n\n",
            "Beneath the chaos lies strict order. The grid follows rules that reveal themselves only through patience and observation. As the Bull understands its rhythm and logic, the heart of the grid responds, revealing paths that once seemed invisible."
        ),
    },
    Story {
        id: 5,
        title: "The Curse of the Arrows",
        body: concat!(
            "The arrows were created to guide movement and bring order to chaos. Over time, they replaced thinking with obedience, turning choice into habit and freedom into routine. People followed directions without question, and the grid grew stronger with every step taken blindly.\n\n",
            "The Golden Bull refused to obey. Instead, he studied the arrows, learning their limits and patterns. By mastering them rather than resisting them, he began to weaken their curse and bend the grid toward escape."
        ),
    },
    Story {
        id: 6,
        title: "The Final Run",
        body: concat!(
            "The grid does not allow endless attempts. When time runs out, paths reset and mistakes vanish without mercy. Each run feels like the last, carrying the weight of every decision made before.\n\n",
            "The Bull understands this is his final chance. Every move must matter. Every choice must serve a purpose. There is no space for hesitation — only focus, clarity, and resolve."
        ),
    },
    Story {
        id: 7,
        title: "The Hoof of Freedom",
        body: concat!(
            "Legends say the grid trembles when the Golden Bull moves closer to escape. Tiles resist, arrows shift, and space tightens as if the maze itself fears his progress.\n\n",
            "Yet every cleared tile weakens the system. With each step forward, the Bull leaves cracks in the structure that once seemed unbreakable, bringing freedom within reach."
        ),
    },
    Story {
        id: 8,
        title: "The Living Maze",
        body: concat!(
            "This maze reacts to thought itself. It adapts, changes patterns, and punishes repetition. What worked once may fail the next time, turning confidence into a trap.\n\n",
            "But even living systems rely on logic. Once the Bull understands how the maze thinks, its illusions collapse. True paths emerge where confusion once ruled."
        ),
    },
    Story {
        id: 9,
        title: "Will of Gold",
        body: concat!(
            "Gold bends slowly, but it does not shatter. The Golden Bull embodies this truth, standing firm against pressure, failure, and doubt within the shifting grid.\n\n",
            "Surrounded by false paths and collapsing plans, his greatest strength is patience. The will to continue thinking becomes the key to survival and escape."
        ),
    },
    Story {
        id: 10,
        title: "Freedom, Finally",
        body: concat!(
            "When the path is finally clear, there is no explosion and no celebration. The grid simply opens, silent and defeated, as if it has lost its purpose.\n\n",
            "The Golden Bull walks out calmly, leaving the maze behind. Without a prisoner to challenge it, the grid fades away, its rules forgotten."
        ),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TILE_PUZZLES;

    #[test]
    fn test_one_artwork_per_puzzle() {
        assert_eq!(PUZZLES.len() as u32, TILE_PUZZLES);
        for id in 1..=TILE_PUZZLES {
            let art = puzzle(id).unwrap();
            assert_eq!(art.title, format!("Puzzle {id}"));
            assert_eq!(art.preview, format!("p{id}_full.png"));
        }
        assert!(puzzle(11).is_none());
    }

    #[test]
    fn test_reused_piece_sets() {
        assert_eq!(puzzle(6).unwrap().pieces, puzzle(4).unwrap().pieces);
        assert_eq!(puzzle(10).unwrap().pieces[8], "p1_9.png");
        assert_eq!(puzzle(3).unwrap().pieces[0], "p3_1.png");
    }

    #[test]
    fn test_stories() {
        assert_eq!(STORIES.len(), 10);
        for (i, s) in STORIES.iter().enumerate() {
            assert_eq!(s.id as usize, i + 1);
            assert!(!s.title.is_empty());
            assert_eq!(s.body.matches("\n\n").count(), 1);
        }
        assert_eq!(story(10).unwrap().title, "Freedom, Finally");
        assert!(story(0).is_none());
    }
}

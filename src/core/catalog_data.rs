//! Static card table. Order here is catalog order.

pub(crate) struct CardEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub upright: &'static str,
    pub reversed: &'static str,
    pub description: &'static str,
}

const fn entry(
    id: &'static str,
    name: &'static str,
    upright: &'static str,
    reversed: &'static str,
    description: &'static str,
) -> CardEntry {
    CardEntry {
        id,
        name,
        upright,
        reversed,
        description,
    }
}

pub(crate) static MAJOR_ARCANA: [CardEntry; 22] = [
    entry(
        "0",
        "The Fool",
        "New beginnings, adventure, freedom, innocence, opportunity",
        "Recklessness, naivety, irresponsibility, feeling lost",
        "A new journey full of possibility and daring. The Fool is the pure spirit that embraces the unknown without fear.",
    ),
    entry(
        "1",
        "The Magician",
        "Creation, confidence, skill, willpower, resourcefulness",
        "Manipulation, deceit, self-doubt, untapped talent",
        "Boundless creativity and the power to turn ideas into reality. The Magician commands all four elements and stands for potential made real.",
    ),
    entry(
        "2",
        "The High Priestess",
        "Intuition, mystery, the subconscious, inner knowledge, spiritual guidance",
        "Secrets, confusion, ignored intuition, emotional swings",
        "Inner wisdom and intuitive power. The High Priestess guards the threshold of the spiritual world and its hidden forces.",
    ),
    entry(
        "3",
        "The Empress",
        "Abundance, nurturing, creativity, prosperity, fertility",
        "Dependence, idleness, materialism, neglect of the practical",
        "The power of abundance and motherhood. The Empress stands for creativity, plenty and the continuation of life.",
    ),
    entry(
        "4",
        "The Emperor",
        "Authority, structure, control, protection, leadership",
        "Tyranny, excessive control, rigidity, inflexibility",
        "Authority and ordered strength. The Emperor represents leadership, protection and a stable foundation.",
    ),
    entry(
        "5",
        "The Hierophant",
        "Tradition, guidance, education, spiritual counsel, social norms",
        "Dogma, blind conformity, restriction, lack of independent thought",
        "Spiritual guidance and traditional values. The Hierophant points the way through shared rules and spiritual growth.",
    ),
    entry(
        "6",
        "The Lovers",
        "Love, choice, harmony, relationships, union",
        "Conflict, wrong choices, disharmony, separation",
        "Love and choice. The Lovers mark an important decision and the growth of an emotional bond.",
    ),
    entry(
        "7",
        "The Chariot",
        "Victory, control, determination, success, willpower",
        "Loss of control, conflict, defeat, stubbornness",
        "Willpower and success. The Chariot overcomes obstacles through resolve and self-discipline.",
    ),
    entry(
        "8",
        "Strength",
        "Courage, inner strength, patience, gentle control, compassion",
        "Weakness, loss of control, impatience, fear",
        "Inner strength and courage. Strength tames raw force with patience rather than violence.",
    ),
    entry(
        "9",
        "The Hermit",
        "Introspection, solitude, wisdom, inner guidance, searching",
        "Isolation, loneliness, withdrawal, refusal of counsel",
        "Introspection and the search for inner wisdom. The Hermit lights the path by stepping away from the noise.",
    ),
    entry(
        "10",
        "Wheel of Fortune",
        "Fate, turning points, cycles, luck, change",
        "Bad luck, resistance to change, broken cycles, setbacks",
        "The cycles of fate and change. The Wheel of Fortune reminds us that life keeps turning and every ending is a beginning.",
    ),
    entry(
        "11",
        "Justice",
        "Fairness, truth, balance, cause and effect, law",
        "Injustice, bias, imbalance, dishonesty",
        "Fairness and balance. Justice stands for cause and effect and for truth coming to light.",
    ),
    entry(
        "12",
        "The Hanged Man",
        "Sacrifice, new perspective, waiting, pause, enlightenment",
        "Needless sacrifice, stagnation, indecision, stubbornness",
        "Sacrifice and a shift in viewpoint. The Hanged Man gains wisdom by looking at things from another angle.",
    ),
    entry(
        "13",
        "Death",
        "Endings, transformation, rebirth, new starts, release",
        "Resistance to change, fear, stagnation, dread of endings",
        "Endings and new beginnings. Death marks a major transformation and the close of an old pattern.",
    ),
    entry(
        "14",
        "Temperance",
        "Balance, moderation, patience, harmony, blending",
        "Imbalance, excess, impatience, discord",
        "Balance and moderation. Temperance blends opposing forces into harmony.",
    ),
    entry(
        "15",
        "The Devil",
        "Bondage, desire, temptation, materialism, limitation",
        "Release, breaking free, overcoming desire, freedom",
        "Bondage and temptation. The Devil shows where we are held by material desire or harmful patterns.",
    ),
    entry(
        "16",
        "The Tower",
        "Sudden change, upheaval, awakening, release, disaster",
        "Fear of change, averted disaster, delayed collapse, ruin",
        "Sudden upheaval and collapse. The Tower tears down old structures so a new view can emerge.",
    ),
    entry(
        "17",
        "The Star",
        "Hope, inspiration, faith, guidance, spirituality",
        "Despair, lost faith, lack of inspiration, confusion",
        "Hope and inspiration. The Star keeps faith alive through difficult times.",
    ),
    entry(
        "18",
        "The Moon",
        "The subconscious, emotion, illusion, fear, mystery",
        "Confusion, anxiety, nightmares, deception",
        "The subconscious and the world of emotion. The Moon reveals hidden fears and the strength of intuition.",
    ),
    entry(
        "19",
        "The Sun",
        "Success, joy, vitality, truth, warmth",
        "Pessimism, low energy, distorted truth, unhappiness",
        "Success and joy. The Sun radiates vitality, truth and positive energy.",
    ),
    entry(
        "20",
        "Judgement",
        "Rebirth, awakening, reckoning, transformation, calling",
        "Avoidance, refusal to change, guilt, stagnation",
        "Rebirth and awakening. Judgement weighs the past and opens a new chapter.",
    ),
    entry(
        "21",
        "The World",
        "Completion, success, fulfillment, travel, achievement",
        "Incompletion, stagnation, dissatisfaction, lack of direction",
        "Completion and fulfillment. The World closes one journey and opens the next.",
    ),
];

pub(crate) static WANDS: [CardEntry; 14] = [
    entry(
        "wands_ace",
        "Ace of Wands",
        "New beginnings, creativity, passion, energy, action",
        "Blocked creativity, lack of passion, low energy, hesitation",
        "The spark of a new idea and fresh energy. The Ace of Wands is the first flame of passion and action.",
    ),
    entry(
        "wands_2",
        "Two of Wands",
        "Planning, decisions, looking ahead, exploration, expansion",
        "Indecision, poor planning, limitation, conflict",
        "Planning for the future and making decisions. The Two of Wands looks out over new possibilities.",
    ),
    entry(
        "wands_3",
        "Three of Wands",
        "Foresight, progress, expansion, teamwork, exploration",
        "Slow progress, short-sightedness, isolation, stagnation",
        "Progress through cooperation and foresight. The Three of Wands watches the ships come in.",
    ),
    entry(
        "wands_4",
        "Four of Wands",
        "Stability, celebration, harmony, completion, home",
        "Instability, conflict, dissatisfaction, isolation",
        "Stability and celebration. The Four of Wands honors a harmonious home and recognized achievement.",
    ),
    entry(
        "wands_5",
        "Five of Wands",
        "Conflict, competition, challenge, disagreement, rivalry",
        "Cooperation, harmony, resolved conflict, team spirit",
        "Conflict and competition. The Five of Wands is the struggle to hold your ground among rivals.",
    ),
    entry(
        "wands_6",
        "Six of Wands",
        "Victory, success, recognition, achievement, confidence",
        "Failure, lack of recognition, self-doubt, obstacles",
        "Victory and success. The Six of Wands rides home to the applause of others.",
    ),
    entry(
        "wands_7",
        "Seven of Wands",
        "Perseverance, defense, challenge, courage, resistance",
        "Giving up, weakness, compromise, retreat",
        "Courage and persistence under pressure. The Seven of Wands defends its position against all comers.",
    ),
    entry(
        "wands_8",
        "Eight of Wands",
        "Speed, momentum, swift action, news, movement",
        "Delays, frustration, scattered energy, waiting",
        "Rapid movement and news in flight. The Eight of Wands brings events to a head quickly.",
    ),
    entry(
        "wands_9",
        "Nine of Wands",
        "Resilience, persistence, vigilance, last stand, grit",
        "Exhaustion, paranoia, defensiveness, giving in",
        "Resilience near the finish line. The Nine of Wands is battered but still standing guard.",
    ),
    entry(
        "wands_10",
        "Ten of Wands",
        "Burden, responsibility, hard work, duty, strain",
        "Release of burdens, delegation, collapse under pressure",
        "The weight of too many responsibilities. The Ten of Wands carries a heavy load toward its goal.",
    ),
    entry(
        "wands_page",
        "Page of Wands",
        "Enthusiasm, exploration, discovery, free spirit, messages",
        "Lack of direction, procrastination, hasty ideas, bad news",
        "An eager messenger of new adventures. The Page of Wands is curious and ready to explore.",
    ),
    entry(
        "wands_knight",
        "Knight of Wands",
        "Energy, passion, adventure, impulsiveness, action",
        "Recklessness, haste, frustration, scattered effort",
        "Bold and passionate action. The Knight of Wands charges ahead in pursuit of adventure.",
    ),
    entry(
        "wands_queen",
        "Queen of Wands",
        "Confidence, warmth, determination, independence, charisma",
        "Jealousy, insecurity, temper, demanding nature",
        "Confident and magnetic. The Queen of Wands leads with warmth and a fierce will.",
    ),
    entry(
        "wands_king",
        "King of Wands",
        "Leadership, vision, entrepreneurship, honor, boldness",
        "Impulsiveness, arrogance, overbearing manner, high expectations",
        "A visionary leader. The King of Wands turns big ideas into bold ventures.",
    ),
];

pub(crate) static CUPS: [CardEntry; 14] = [
    entry(
        "cups_ace",
        "Ace of Cups",
        "New love, emotional renewal, compassion, creativity, intuition",
        "Blocked emotions, emptiness, repressed feelings",
        "An overflowing chalice of feeling. The Ace of Cups opens the heart to new love and connection.",
    ),
    entry(
        "cups_2",
        "Two of Cups",
        "Partnership, mutual attraction, unity, connection",
        "Imbalance, broken bonds, distrust, separation",
        "A meeting of two hearts. The Two of Cups seals a bond of mutual respect and affection.",
    ),
    entry(
        "cups_3",
        "Three of Cups",
        "Friendship, celebration, community, joy",
        "Overindulgence, gossip, isolation, strained friendships",
        "Friends raising their cups together. The Three of Cups celebrates community and shared happiness.",
    ),
    entry(
        "cups_4",
        "Four of Cups",
        "Apathy, contemplation, reevaluation, missed chances",
        "Renewed interest, acceptance, seizing opportunity",
        "Withdrawal and discontent. The Four of Cups is too absorbed to notice the cup being offered.",
    ),
    entry(
        "cups_5",
        "Five of Cups",
        "Loss, grief, regret, disappointment",
        "Acceptance, moving on, forgiveness, recovery",
        "Mourning what was spilled. The Five of Cups forgets the two cups still standing behind it.",
    ),
    entry(
        "cups_6",
        "Six of Cups",
        "Nostalgia, childhood memories, innocence, kindness",
        "Living in the past, naivety, unrealistic memories",
        "Sweet memories of the past. The Six of Cups offers simple gifts and innocent joy.",
    ),
    entry(
        "cups_7",
        "Seven of Cups",
        "Choices, fantasy, illusion, wishful thinking",
        "Clarity, focus, decisive action, reality check",
        "Many dreams floating in the clouds. The Seven of Cups warns that not every vision is real.",
    ),
    entry(
        "cups_8",
        "Eight of Cups",
        "Walking away, disillusionment, searching for meaning",
        "Fear of change, aimless drifting, staying too long",
        "Leaving behind what no longer fulfills. The Eight of Cups sets out in search of something deeper.",
    ),
    entry(
        "cups_9",
        "Nine of Cups",
        "Contentment, satisfaction, wishes granted, gratitude",
        "Smugness, dissatisfaction, overindulgence",
        "The wish card. The Nine of Cups sits content among its achievements.",
    ),
    entry(
        "cups_10",
        "Ten of Cups",
        "Harmony, happy family, emotional fulfillment, bliss",
        "Broken home, disconnection, misaligned values",
        "Lasting happiness under a rainbow. The Ten of Cups is emotional fulfillment shared with loved ones.",
    ),
    entry(
        "cups_page",
        "Page of Cups",
        "Creative opportunity, curiosity, intuitive messages",
        "Emotional immaturity, creative block, escapism",
        "A dreamy messenger of feeling. The Page of Cups brings a surprising emotional or creative offer.",
    ),
    entry(
        "cups_knight",
        "Knight of Cups",
        "Romance, charm, imagination, following the heart",
        "Moodiness, unrealistic ideals, jealousy",
        "The romantic idealist. The Knight of Cups follows the heart wherever it leads.",
    ),
    entry(
        "cups_queen",
        "Queen of Cups",
        "Compassion, calm, emotional security, intuition",
        "Insecurity, codependence, emotional overwhelm",
        "A caring, intuitive presence. The Queen of Cups holds space for the feelings of others.",
    ),
    entry(
        "cups_king",
        "King of Cups",
        "Emotional balance, diplomacy, generosity, wisdom",
        "Manipulation, moodiness, emotional coldness",
        "Mastery over feeling. The King of Cups stays calm and generous in rough waters.",
    ),
];

pub(crate) static SWORDS: [CardEntry; 14] = [
    entry(
        "swords_ace",
        "Ace of Swords",
        "Clarity, breakthrough, truth, new ideas",
        "Confusion, misinformation, clouded judgment",
        "A blade of pure thought. The Ace of Swords cuts through confusion to reveal the truth.",
    ),
    entry(
        "swords_2",
        "Two of Swords",
        "Difficult decisions, stalemate, avoidance",
        "Indecision, information overload, lifting the blindfold",
        "A choice held in balance. The Two of Swords refuses to look until it must decide.",
    ),
    entry(
        "swords_3",
        "Three of Swords",
        "Heartbreak, sorrow, grief, painful truth",
        "Healing, forgiveness, recovering from pain",
        "A heart pierced by three blades. The Three of Swords names the pain so it can heal.",
    ),
    entry(
        "swords_4",
        "Four of Swords",
        "Rest, recovery, contemplation, retreat",
        "Restlessness, burnout, refusing to pause",
        "Quiet rest after conflict. The Four of Swords withdraws to recover its strength.",
    ),
    entry(
        "swords_5",
        "Five of Swords",
        "Conflict, hollow victory, tension, winning at all costs",
        "Reconciliation, making amends, letting go of resentment",
        "A victory that costs more than it gains. The Five of Swords walks away with everything and no one.",
    ),
    entry(
        "swords_6",
        "Six of Swords",
        "Transition, moving on, leaving trouble behind",
        "Stuck in the past, resisting change, unfinished business",
        "Crossing to calmer waters. The Six of Swords carries you away from turmoil.",
    ),
    entry(
        "swords_7",
        "Seven of Swords",
        "Deception, strategy, stealth, getting away with something",
        "Confession, conscience, being caught out",
        "A thief slipping away. The Seven of Swords warns of cunning and hidden agendas.",
    ),
    entry(
        "swords_8",
        "Eight of Swords",
        "Restriction, self-imposed limits, feeling trapped",
        "Release, new perspective, self-acceptance",
        "Bound by one's own fears. The Eight of Swords could walk free if it only looked around.",
    ),
    entry(
        "swords_9",
        "Nine of Swords",
        "Anxiety, worry, nightmares, despair",
        "Hope, reaching out, releasing fear",
        "Sleepless nights of worry. The Nine of Swords shows fears that loom larger in the dark.",
    ),
    entry(
        "swords_10",
        "Ten of Swords",
        "Painful ending, betrayal, rock bottom",
        "Recovery, regeneration, surviving the worst",
        "The lowest point. The Ten of Swords marks an ending after which the only way is up.",
    ),
    entry(
        "swords_page",
        "Page of Swords",
        "Curiosity, vigilance, new ideas, thirst for knowledge",
        "Gossip, all talk and no action, hastiness",
        "An alert young mind. The Page of Swords questions everything and watches closely.",
    ),
    entry(
        "swords_knight",
        "Knight of Swords",
        "Ambition, drive, fast thinking, decisive action",
        "Impulsiveness, aggression, rushing in",
        "Charging into the wind. The Knight of Swords pursues its goal with sharp focus.",
    ),
    entry(
        "swords_queen",
        "Queen of Swords",
        "Independence, clear judgment, honesty, perception",
        "Coldness, bitterness, harsh criticism",
        "Clear-eyed and direct. The Queen of Swords speaks the truth without flinching.",
    ),
    entry(
        "swords_king",
        "King of Swords",
        "Intellectual power, authority, truth, ethics",
        "Manipulation, tyranny, abuse of power",
        "The master of reason. The King of Swords rules by logic and principle.",
    ),
];

pub(crate) static PENTACLES: [CardEntry; 14] = [
    entry(
        "pentacles_ace",
        "Ace of Pentacles",
        "New financial opportunity, prosperity, manifestation",
        "Missed opportunity, poor planning, scarcity",
        "A golden coin offered from the clouds. The Ace of Pentacles is the seed of material success.",
    ),
    entry(
        "pentacles_2",
        "Two of Pentacles",
        "Balance, adaptability, juggling priorities",
        "Overwhelm, disorganization, financial strain",
        "Juggling two coins with ease. The Two of Pentacles keeps many demands in motion.",
    ),
    entry(
        "pentacles_3",
        "Three of Pentacles",
        "Teamwork, craftsmanship, collaboration, learning",
        "Poor teamwork, mediocrity, lack of effort",
        "Skilled hands building together. The Three of Pentacles rewards collaboration and craft.",
    ),
    entry(
        "pentacles_4",
        "Four of Pentacles",
        "Security, saving, control, conservatism",
        "Greed, materialism, fear of loss",
        "Holding tight to what one has. The Four of Pentacles values security above all.",
    ),
    entry(
        "pentacles_5",
        "Five of Pentacles",
        "Hardship, poverty, isolation, worry",
        "Recovery, spiritual renewal, help arriving",
        "Out in the cold. The Five of Pentacles passes a lit window without asking for help.",
    ),
    entry(
        "pentacles_6",
        "Six of Pentacles",
        "Generosity, charity, sharing, fairness",
        "Strings attached, debt, one-sided giving",
        "Giving and receiving in balance. The Six of Pentacles shares its wealth with those in need.",
    ),
    entry(
        "pentacles_7",
        "Seven of Pentacles",
        "Patience, long-term investment, perseverance",
        "Impatience, poor returns, wasted effort",
        "Waiting for the harvest. The Seven of Pentacles assesses the fruits of its labor.",
    ),
    entry(
        "pentacles_8",
        "Eight of Pentacles",
        "Diligence, skill development, mastery, dedication",
        "Perfectionism, lack of focus, mediocre work",
        "The apprentice at the bench. The Eight of Pentacles hones a craft one piece at a time.",
    ),
    entry(
        "pentacles_9",
        "Nine of Pentacles",
        "Abundance, independence, luxury, self-sufficiency",
        "Overspending, dependence, superficial success",
        "Enjoying the garden of one's own making. The Nine of Pentacles is comfort earned through effort.",
    ),
    entry(
        "pentacles_10",
        "Ten of Pentacles",
        "Wealth, legacy, family, long-term success",
        "Financial loss, family disputes, instability",
        "Prosperity passed through generations. The Ten of Pentacles builds a lasting legacy.",
    ),
    entry(
        "pentacles_page",
        "Page of Pentacles",
        "Ambition, diligence, new study, manifestation",
        "Lack of progress, procrastination, missed lessons",
        "A student gazing at a coin. The Page of Pentacles starts a practical new venture.",
    ),
    entry(
        "pentacles_knight",
        "Knight of Pentacles",
        "Hard work, routine, reliability, patience",
        "Boredom, stagnation, laziness, perfectionism",
        "Slow and steady. The Knight of Pentacles gets there through reliable effort.",
    ),
    entry(
        "pentacles_queen",
        "Queen of Pentacles",
        "Nurturing, practicality, abundance, security",
        "Self-neglect, work-home imbalance, smothering",
        "Grounded care. The Queen of Pentacles tends both home and hearth with practical warmth.",
    ),
    entry(
        "pentacles_king",
        "King of Pentacles",
        "Wealth, business acumen, leadership, security",
        "Greed, stubbornness, obsession with status",
        "The successful provider. The King of Pentacles presides over a well-built kingdom.",
    ),
];

//! The Pheochromocytoma case: episodic hypertension on the internal
//! medicine ward, Dr. Rampy presiding. Five scenes from first call through
//! diagnosis to management.
//!
//! Unlike the Kawasaki case, this one has a genuinely reachable losing
//! terminal: starting beta-blockade before alpha-blockade precipitates a
//! hypertensive crisis and ends the session as a non-win.

use crate::story_engine::models::{
    ChoiceEffect, EndingSet, FindingKind, Line, Scene, SceneSetup, Story, StoryId,
};
use crate::story_engine::stories::{advance, end, stay};

const BANNER: &str = r"
    ██████╗ ██████╗ ██╗  ██╗██████╗  █████╗ ███╗   ███╗██████╗ ██╗   ██╗
    ██╔══██╗██╔══██╗╚██╗██╔╝██╔══██╗██╔══██╗████╗ ████║██╔══██╗╚██╗ ██╔╝
    ██║  ██║██║  ██║ ╚███╔╝ ██████╔╝███████║██╔████╔██║██████╔╝ ╚████╔╝
    ██║  ██║██║  ██║ ██╔██╗ ██╔══██╗██╔══██║██║╚██╔╝██║██╔═══╝   ╚██╔╝
    ██████╔╝██████╔╝██╔╝ ██╗██║  ██║██║  ██║██║ ╚═╝ ██║██║        ██║
    ╚═════╝ ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═╝╚═╝  ╚═╝╚═╝     ╚═╝╚═╝        ╚═╝
";

pub fn story() -> Story {
    Story {
        id: StoryId::Pheochromocytoma,
        title: "ddxRAMPY: A Terminal Adventure".to_string(),
        attending: "Dr. Rampy".to_string(),
        banner: BANNER,
        intro: vec![
            Line::success("🏥 Welcome to ddxRAMPY: A Terminal Adventure 🏥"),
            Line::ui("Where every patient is a puzzle, and every attending is a final boss..."),
            Line::inner("...and your impostor syndrome is your true nemesis!"),
            Line::success("Type 'hint' at any decision point to get a clinical pearl! (3 available per game)"),
        ],
        name_prompt: "\nEnter your name, brave medical student: ".to_string(),
        opening: vec![
            Line::scenario("[Dell Medical School - Internal Medicine Ward]"),
            Line::scenario("It's 6:45 AM. Pre-rounds are about to start."),
            Line::scenario("You, Dr. {name}, are nervously reviewing your patient's chart when..."),
            Line::scenario("....."),
            Line::attending("👩‍⚕️ Dr. Rampy appears suddenly behind you!"),
            Line::attending("'Ah, perfect timing. New admission in room 2.'"),
            Line::attending("'37-year-old woman with... interesting vital signs.'"),
            Line::inner("(Your brain: 'Why do all attendings have ninja-level stealth? And why are vitals always \"interesting\" not \"concerning\"?')"),
        ],
        scenes: vec![
            first_call(),
            episodic_history(),
            diagnostic_workup(),
            final_diagnosis(),
            management(),
        ],
        starting_inventory: vec![
            "Pocket medicine handbook".to_string(),
            "Stethoscope (you've convinced yourself it's haunted)".to_string(),
            "Granola bar from orientation week".to_string(),
        ],
        hint_pool: vec![
            "The classic triad: headaches, sweating, and tachycardia.".to_string(),
            "Always block alpha receptors BEFORE beta receptors.".to_string(),
            "The rule of 10s: 10% extra-adrenal, 10% bilateral, 10% malignant, 10% hereditary.".to_string(),
            "Plasma free metanephrines is the most sensitive test.".to_string(),
            "Never palpate the abdomen vigorously when you suspect this diagnosis.".to_string(),
        ],
        endings: endings(),
    }
}

fn first_call() -> Scene {
    Scene {
        name: "first-call".to_string(),
        setup: SceneSetup::Static(vec![]),
        setup_findings: vec![],
        setup_items: vec![],
        prompt: "What would you like to do?".to_string(),
        options: vec![
            advance(
                "Ask about the vital signs",
                vec![
                    Line::success("Dr. Rampy raises an eyebrow, seemingly impressed by your initiative."),
                    Line::attending("'BP 178/104, HR 122, Temp 36.3°C. Make of that what you will.'"),
                    Line::inner("(Your brain: 'Hypertension AND tachycardia? That's... concerning. Secondary HTN maybe?')"),
                ],
                ChoiceEffect::new()
                    .correct(1)
                    .clue("Hypertension with tachycardia")
                    .finding(FindingKind::Vitals, "BP 178/104, HR 122, Temp 36.3°C"),
            ),
            stay(
                "Review the chart first",
                vec![
                    Line::failure("Dr. Rampy sighs. 'AHEM, didn't I JUST say... 'interesting VITALS'?! Time is of the essence, doctor.'"),
                    Line::inner("(Your brain: 'Great, now I look like I can't follow simple instructions. Stellar start.')"),
                ],
                ChoiceEffect::new().reputation(-5),
            ),
            stay(
                "Go see the patient immediately",
                vec![
                    Line::failure("Dr. Rampy blocks your path with surprising agility."),
                    Line::attending("'Perhaps some... pertinent information first?'"),
                    Line::inner("(Your brain: 'What is it with attendings and blocking doorways? Is this a medical education ritual?')"),
                ],
                ChoiceEffect::new().anxiety(10),
            ),
            stay(
                "Pretend you didn't hear and keep typing notes*",
                vec![
                    Line::failure("*Your typing intensifies nervously*"),
                    Line::attending("Dr. Rampy: 'I can see you typing 'HELP' repeatedly.'"),
                    Line::attending("'And is that... Zelda you're playing on an emulator?'"),
                    Line::inner("(Your brain: 'In my defense, Breath of the Wild has gotten me through many rough call nights...')"),
                ],
                ChoiceEffect::new().anxiety(20).reputation(-10),
            ),
        ],
        invalid: Line::failure("Dr. Rampy frowns. 'That wasn't one of the options, doctor.'"),
    }
}

fn episodic_history() -> Scene {
    Scene {
        name: "episodic-history".to_string(),
        setup: SceneSetup::Static(vec![Line::attending(
            "Dr. Rampy taps their pen thoughtfully. 'So, given these vital signs...'",
        )]),
        setup_findings: vec![],
        setup_items: vec![],
        prompt: "What's your next move?".to_string(),
        options: vec![
            advance(
                "'Could we get more history about the headaches?'",
                vec![
                    Line::success("'Ah, finally asking the right questions!' Dr. Rampy's eyes light up."),
                    Line::attending("'Patient reports episodic symptoms including headache, palpitations, and diaphoresis...'"),
                    Line::attending("'Been occurring on and off for 3 months, lasting 15-30 minutes, once or twice a week.'"),
                    Line::attending("'Yesterday's episode was more intense and lasted about an hour.'"),
                    Line::inner("(Your brain: 'Episodic symptoms? That narrows things down considerably...')"),
                ],
                ChoiceEffect::new()
                    .correct(1)
                    .reputation(10)
                    .clue("Episodic symptoms: headache, palpitations, diaphoresis")
                    .finding(
                        FindingKind::History,
                        "Episodic headache, palpitations, and diaphoresis for 3 months",
                    ),
            ),
            stay(
                "*Frantically google 'high BP + tachycardia' on your phone*",
                vec![
                    Line::failure("Dr. Rampy: 'Your phone's UpToDate history is... interesting.'"),
                    Line::attending("'Let me see... ah yes, \"help attending scary BP high\" - very professional.'"),
                    Line::inner("(Your brain: 'Note to self: Clear browser history BEFORE rotations...')"),
                ],
                ChoiceEffect::new().anxiety(15),
            ),
            stay(
                "'RAPID RESPONSE!' *Reaches for the emergency button*",
                vec![
                    Line::failure("Dr. Rampy physically blocks your path to the button with impressive reflexes."),
                    Line::attending("'Let's not alert the ENTIRE HOSPITAL just yet, shall we?'"),
                    Line::inner("(Your brain: 'Remember that time I wanted to call a rapid response and almost got tackled by my attending? Good times.')"),
                ],
                ChoiceEffect::new().anxiety(25).reputation(-15),
            ),
            advance(
                "'Well, when we consider the sympathetic nervous system...'",
                vec![
                    Line::success("Dr. Rampy's eyebrow raises to previously unknown heights."),
                    Line::attending("'Going straight for the pathophysiology? Bold choice.'"),
                    Line::attending("'But yes, we should consider sympathetic activation here.'"),
                    Line::inner("(Your brain: 'Wait, did I just say something smart? Is this... competence?')"),
                ],
                ChoiceEffect::new()
                    .correct(1)
                    .clue("Sympathetic nervous system activation"),
            ),
        ],
        invalid: Line::failure("Dr. Rampy: 'That wasn't one of the options. Again.'"),
    }
}

fn diagnostic_workup() -> Scene {
    Scene {
        name: "diagnostic-workup".to_string(),
        setup: SceneSetup::Static(vec![
            Line::scenario("Dr. Rampy hands you the patient's chart."),
            Line::attending("'So, Dr. {name}, what's your diagnostic approach?'"),
            Line::inner("(Your brain rapidly cycles through everything you've ever learned about hypertension and sympathetic activation...)"),
        ]),
        setup_findings: vec![],
        setup_items: vec![],
        prompt: "What tests would you order?".to_string(),
        options: vec![
            advance(
                "'Let's get plasma metanephrines and catecholamines'",
                vec![
                    Line::success("Dr. Rampy's eyes widen with visible approval."),
                    Line::attending("'Excellent choice. Going straight for the gold standard.'"),
                    Line::inner("(Your brain: 'Wow, I actually remembered the right test! Those UWorld questions weren't for nothing!')"),
                ],
                ChoiceEffect::new()
                    .correct(2)
                    .reputation(15)
                    .clue("Ordered plasma metanephrines")
                    .finding(FindingKind::Workup, "Ordered: plasma metanephrines and catecholamines")
                    .item("Lab order for plasma metanephrines (smart move!)"),
            ),
            stay(
                "'I'd like to order a Head CT and EKG'",
                vec![
                    Line::failure("Dr. Rampy tilts her head. 'Not entirely off base, but perhaps premature.'"),
                    Line::attending("'Let's think about the underlying cause of these symptoms first.'"),
                    Line::inner("(Your brain: 'Right, diagnose THEN image. Basic stuff, focus!')"),
                ],
                ChoiceEffect::new().reputation(-5),
            ),
            stay(
                "'Let's start with a basic metabolic panel and CBC'",
                vec![
                    Line::attending("'Standard workup, I see. Safe but... uninspired.'"),
                    Line::attending("'These might be helpful as baseline data, but unlikely to yield our diagnosis.'"),
                    Line::inner("(Your brain: 'The medical equivalent of ordering vanilla ice cream. Not wrong, just... boring.')"),
                ],
                ChoiceEffect::new().correct(1),
            ),
            stay(
                "'Maybe we should check aldosterone and renin levels?'",
                vec![
                    Line::attending("'Hmm, thinking about Conn's syndrome? Interesting differential.'"),
                    Line::attending("'But remember the episodic nature of the symptoms.'"),
                    Line::inner("(Your brain: 'Close! Right system, wrong gland. Think adrenal medulla, not cortex...')"),
                ],
                ChoiceEffect::new()
                    .correct(1)
                    .clue("Considered endocrine causes of hypertension"),
            ),
        ],
        invalid: Line::failure("Dr. Rampy sighs. 'Please choose from the options provided.'"),
    }
}

fn final_diagnosis() -> Scene {
    Scene {
        name: "final-diagnosis".to_string(),
        setup: SceneSetup::Static(vec![
            Line::scenario("The next day, Dr. Rampy approaches with the test results."),
            Line::attending("'Well, the labs are back. Care to make your diagnosis?'"),
            Line::ui("Metanephrine (free), plasma: 5.2 nmol/L (ref: <0.50)"),
            Line::ui("Normetanephrine (free), plasma: 9.8 nmol/L (ref: <0.90)"),
            Line::inner("(Your heart races. 'This is my moment. Don't say pancreatitis, don't say pancreatitis...')"),
        ]),
        setup_findings: vec![crate::story_engine::models::Finding::new(
            FindingKind::Workup,
            "Labs: Markedly elevated plasma metanephrines and normetanephrines",
        )],
        setup_items: vec!["Lab report with elevated metanephrines (Jackpot!)".to_string()],
        prompt: "What's your diagnosis?".to_string(),
        options: vec![
            advance(
                "'This patient has a pheochromocytoma'",
                vec![
                    Line::success("Dr. Rampy breaks into a rare, genuine smile!"),
                    Line::attending("'Excellent diagnosis, doctor! The CT scan confirms a 3.2 cm right adrenal mass.'"),
                    Line::inner("(Your brain explodes with confetti. 'I DIAGNOSED SOMETHING REAL AND RARE! This is going in my personal statement.')"),
                ],
                ChoiceEffect::new()
                    .correct(2)
                    .reputation(15)
                    .finding(FindingKind::Diagnosis, "Final diagnosis: Pheochromocytoma")
                    .finding(FindingKind::Exam, "3.2 cm right adrenal mass on CT"),
            ),
            stay(
                "'I believe this is essential hypertension with anxiety'",
                vec![
                    Line::failure("Dr. Rampy's face falls. 'Really? With those metanephrine levels?'"),
                    Line::attending("'Perhaps reconsider the episodic nature and catecholamine excess?'"),
                    Line::inner("(Your brain: 'Way to ignore the lab values that are literally 10x normal. Stellar work.')"),
                ],
                ChoiceEffect::new().reputation(-10),
            ),
            stay(
                "'The patient has Conn's syndrome (primary hyperaldosteronism)'",
                vec![
                    Line::failure("Dr. Rampy shakes her head. 'Close, but not quite right.'"),
                    Line::attending("'Conn's would typically present with hypokalemia and wouldn't explain the episodic symptoms.'"),
                    Line::inner("(Your brain: 'Wrong adrenal hormone again! Remember, Conn's = aldosterone, not catecholamines!')"),
                ],
                ChoiceEffect::new(),
            ),
            stay(
                "'I need more tests before making a diagnosis'",
                vec![
                    Line::failure("Dr. Rampy sighs deeply. 'Indecisiveness is not a virtue in medicine.'"),
                    Line::attending("'The elevated plasma metanephrines are quite diagnostic here.'"),
                    Line::inner("(Your brain: 'Ah yes, the classic medical student move: when in doubt, order more tests!')"),
                ],
                ChoiceEffect::new().anxiety(10).reputation(-5),
            ),
        ],
        invalid: Line::failure("'Focus, doctor. This is a critical moment.'"),
    }
}

fn management() -> Scene {
    Scene {
        name: "management".to_string(),
        setup: SceneSetup::Static(vec![
            Line::attending("Dr. Rampy looks expectantly at you. 'Now that we have our diagnosis, what's our next step?'"),
            Line::inner("(Your brain: 'Wait, we're not done? There's a management portion to this test too?')"),
        ]),
        setup_findings: vec![],
        setup_items: vec![],
        prompt: "What's your management plan?".to_string(),
        options: vec![
            end(
                "'Start beta-blockers to control the tachycardia, then schedule surgery'",
                vec![
                    Line::failure("Dr. Rampy gasps audibly. 'ABSOLUTELY NOT!'"),
                    Line::attending("'Starting beta-blockers without alpha blockade causes unopposed alpha-mediated vasoconstriction!'"),
                    Line::scenario("The patient's blood pressure surges before the order can be cancelled."),
                    Line::inner("(Your brain: 'And that's how you kill a patient. Good job breaking the first rule of medicine!')"),
                ],
                ChoiceEffect::new().anxiety(15).reputation(-10),
                false,
            ),
            end(
                "'Start alpha-blockers like phenoxybenzamine first, then add beta-blockers if needed'",
                vec![
                    Line::success("Dr. Rampy nods enthusiastically. 'Precisely correct!'"),
                    Line::attending("'Alpha blockade must precede beta blockade to prevent unopposed alpha-mediated vasoconstriction.'"),
                    Line::attending("'We'll start phenoxybenzamine, then add a beta-blocker once blood pressure is controlled.'"),
                    Line::inner("(Your brain: 'That random factoid from that one lecture actually paid off! Guess attendance does matter.')"),
                ],
                ChoiceEffect::new()
                    .correct(2)
                    .reputation(15)
                    .finding(
                        FindingKind::Diagnosis,
                        "Treatment plan: alpha blockade, then beta blockade, then adrenalectomy",
                    ),
                true,
            ),
            stay(
                "'Immediate surgical referral for adrenalectomy'",
                vec![
                    Line::failure("'Not so fast,' says Dr. Rampy. 'We need medical management first.'"),
                    Line::attending("'Operating on an unprepared patient with a pheochromocytoma would be extremely dangerous.'"),
                    Line::inner("(Your brain: 'Right, preparation first. Surgery isn't always the immediate answer.')"),
                ],
                ChoiceEffect::new().reputation(-5),
            ),
            stay(
                "'Start an ACE inhibitor and monitor blood pressure'",
                vec![
                    Line::failure("Dr. Rampy shakes her head. 'That's not standard management for pheochromocytoma.'"),
                    Line::attending("'There's a specific protocol we need to follow here.'"),
                    Line::inner("(Your brain: 'ACE inhibitors are not the answer to everything, despite what Step 1 would have you believe.')"),
                ],
                ChoiceEffect::new().anxiety(5),
            ),
        ],
        invalid: Line::failure("'Please choose a valid option, doctor. This patient needs proper care.'"),
    }
}

fn endings() -> EndingSet {
    EndingSet {
        win_lead: vec![
            Line::success("CONGRATULATIONS! You correctly diagnosed and managed a patient with pheochromocytoma!"),
            Line::attending("Dr. Rampy nods approvingly. 'Well done. I'll schedule the patient for an adrenalectomy.'"),
            Line::attending("'Alpha blockade first, of course, then surgery. Classic management.'"),
        ],
        top: vec![
            Line::attending("'You know, you might actually survive residency after all.'"),
            Line::success("You've impressed Dr. Rampy - a rare achievement indeed!"),
            Line::inner("(Your brain: 'Did Dr. Rampy just... compliment me? Is this real life?')"),
        ],
        solid: vec![
            Line::attending("'Not bad for a student. You still have much to learn, but there's potential.'"),
            Line::inner("(Your brain: 'From Dr. Rampy, that's practically a standing ovation.')"),
        ],
        rough: vec![
            Line::attending("'You got there eventually, though rather... circuitously.'"),
            Line::inner("(Your brain: 'Translation: You stumbled to the finish line, but at least you finished.')"),
        ],
        loss: vec![
            Line::failure("The patient was transferred to the ICU after a hypertensive crisis."),
            Line::failure("Dr. Rampy looks disappointed. 'We'll discuss this further at your evaluation.'"),
            Line::inner("(Your brain: 'Maybe I should have gone into accounting like my mother suggested...')"),
        ],
        signoff: vec![
            Line::success("Thank you for playing ddxRAMPY: PHEOCHROMOCYTOMA EDITION!"),
            Line::success("Remember, in medicine as in gaming: the sympathetic surge is real!"),
        ],
    }
}

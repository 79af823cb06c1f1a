//! The Kawasaki Disease case: a febrile 5-year-old on the pediatric ward,
//! Dr. Crook presiding. Five scenes from first call to final diagnosis.
//!
//! This is the variant with the findings-driven workup recap: the fourth
//! scene only recites what the player actually discovered. It has no
//! reachable losing terminal; every wrong turn loops, and only the correct
//! diagnosis ends the case.

use crate::story_engine::models::{
    ChoiceEffect, EndingSet, FindingKind, Line, Scene, SceneSetup, Story, StoryId,
};
use crate::story_engine::stories::{advance, end, stay};

const BANNER: &str = r"
    ██████╗ ██████╗ ██╗  ██╗ ██████╗██████╗  ██████╗  ██████╗ ██╗  ██╗
    ██╔══██╗██╔══██╗╚██╗██╔╝██╔════╝██╔══██╗██╔═══██╗██╔═══██╗██║ ██╔╝
    ██║  ██║██║  ██║ ╚███╔╝ ██║     ██████╔╝██║   ██║██║   ██║█████╔╝
    ██║  ██║██║  ██║ ██╔██╗ ██║     ██╔══██╗██║   ██║██║   ██║██╔═██╗
    ██████╔╝██████╔╝██╔╝ ██╗╚██████╗██║  ██║╚██████╔╝╚██████╔╝██║  ██╗
    ╚═════╝ ╚═════╝ ╚═╝  ╚═╝ ╚═════╝╚═╝  ╚═╝ ╚═════╝  ╚═════╝ ╚═╝  ╚═╝
";

pub fn story() -> Story {
    Story {
        id: StoryId::Kawasaki,
        title: "ddxCROOK: A Pediatric Diagnosis Adventure".to_string(),
        attending: "Dr. Crook".to_string(),
        banner: BANNER,
        intro: vec![
            Line::success("🏥 Welcome to ddxCROOK: A Pediatric Diagnosis Adventure 🏥"),
            Line::ui("Where every child is a diagnostic puzzle, and every attending is a final boss..."),
            Line::inner("(and your impostor syndrome is your true nemesis)"),
            Line::success("Type 'hint' at any decision point to get a clinical pearl! (3 available per game)"),
        ],
        name_prompt: "\nEnter your name, brave medical student: ".to_string(),
        opening: vec![
            Line::scenario("[7:15 AM - Pediatric Ward]"),
            Line::scenario("Morning rounds are about to start."),
            Line::scenario("You, Dr. {name}, are nervously reviewing your patient list when..."),
            Line::scenario("....."),
            Line::attending("👨‍⚕️ Dr. Crook appears suddenly behind you with uncanny stealth!"),
            Line::attending("'Ah, perfect timing. Got an interesting admission overnight.'"),
            Line::attending("'5-year-old with quite the constellation of symptoms. Fascinating vitals too.'"),
            Line::inner("(You: 'Why do attendings always appear out of nowhere? Do they teach teleportation in med school?')"),
        ],
        scenes: vec![
            first_call(),
            fever_history(),
            systematic_exam(),
            diagnostic_workup(),
            final_diagnosis(),
        ],
        starting_inventory: vec![
            "Pocket medicine handbook".to_string(),
            "Stethoscope (barely know how to use it)".to_string(),
            "Half-eaten granola bar".to_string(),
        ],
        hint_pool: vec![
            "Does... 'CRASH & BURN' ring a bell?! 👀".to_string(),
            "This disease typically affects wee lads under 5 years old.".to_string(),
            "The strawberry tongue is a distinctive finding... 🍓".to_string(),
            "Coronary artery aneurysms are the most serious complication.".to_string(),
            "Fever lasting more than 5 days is a key diagnostic criterion.".to_string(),
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
                    Line::success("Dr. Crook raises an eyebrow, seemingly impressed by your initiative."),
                    Line::attending("'Temperature 39.8°C, HR 130, RR 28, BP 95/60. Make of that what you will.'"),
                    Line::inner("(Your brain: 'High fever in a kid... infections, rheumatic fever, maybe something auto-inflammatory?')"),
                ],
                ChoiceEffect::new()
                    .correct(1)
                    .clue("High fever with tachycardia")
                    .finding(FindingKind::Vitals, "Temp 39.8°C, HR 130, RR 28, BP 95/60"),
            ),
            stay(
                "Review the chart first",
                vec![
                    Line::failure("Dr. Crook sighs dramatically. 'Did I not JUST mention... interesting VITALS? These kids don't have all day, doctor.'"),
                    Line::inner("(Your brain: 'Great start. Really nailing this whole doctor thing.')"),
                ],
                ChoiceEffect::new().reputation(-5),
            ),
            stay(
                "Go see the patient immediately",
                vec![
                    Line::failure("Dr. Crook blocks your path with surprising agility."),
                    Line::attending("'Hold up there, speed racer. Perhaps some... pertinent information first?'"),
                    Line::inner("(Your brain: 'Ah yes, the classic medical student blunder: enthusiasm without information.')"),
                ],
                ChoiceEffect::new().anxiety(10),
            ),
            stay(
                "Pretend you didn't hear and keep typing notes*",
                vec![
                    Line::failure("*Your typing intensifies nervously*"),
                    Line::attending("Dr. Crook: 'I can see you typing 'HELP ME PLEASE' repeatedly.'"),
                    Line::attending("'And is that... Zelda you're playing on an emulator? In the pediatric ward?'"),
                    Line::inner("(Your brain: 'Maybe if I type fast enough, I'll time travel to graduation...')"),
                ],
                ChoiceEffect::new().anxiety(20).reputation(-10),
            ),
        ],
        invalid: Line::failure(
            "Dr. Crook frowns. 'That wasn't one of the options, doctor. Kids' health is at stake here.'",
        ),
    }
}

fn fever_history() -> Scene {
    Scene {
        name: "fever-history".to_string(),
        setup: SceneSetup::Static(vec![Line::attending(
            "Dr. Crook taps his clipboard thoughtfully. 'So, given these vitals in a 5-year-old... \
             Temp 39.8°C, HR 130, RR 28, BP 95/60...'",
        )]),
        setup_findings: vec![],
        setup_items: vec![],
        prompt: "What's your next move?".to_string(),
        options: vec![
            advance(
                "'How long has the fever persisted?'",
                vec![
                    Line::success("'Finally asking the right questions!' Dr. Crook's eyes light up."),
                    Line::attending("'Fever for 5 days now, started at 38.5°C but has been persistently above 39°C'"),
                    Line::attending("'Tylenol and Motrin barely touching it. Parents are appropriately freaking out.'"),
                    Line::inner("(Your brain: 'Five days of fever resistant to antipyretics... definitely narrowing the differential.')"),
                ],
                ChoiceEffect::new()
                    .correct(1)
                    .reputation(10)
                    .clue("Persistent high fever >5 days")
                    .finding(
                        FindingKind::History,
                        "5 days of persistent fever >39°C, poorly responsive to antipyretics",
                    ),
            ),
            stay(
                "*Frantically google 'kid fever fast heart' on your phone*",
                vec![
                    Line::failure("Dr. Crook: 'Your phone's UpToDate history is... illuminating.'"),
                    Line::attending("'Let me see... ah yes, \"OMG HELP FEVER KID DYING\" - very professional, doctor.'"),
                    Line::inner("(Your brain: 'Maybe I should've gone with the less conspicuous \"kid fever not clickbait\" search.')"),
                ],
                ChoiceEffect::new().anxiety(15),
            ),
            stay(
                "'PEDS RAPID RESPONSE!' *Reaches for the emergency button*",
                vec![
                    Line::failure("Dr. Crook physically blocks your path to the button with impressive reflexes."),
                    Line::attending("'Let's not alert the ENTIRE PEDIATRIC FLOOR just yet, shall we?'"),
                    Line::inner("(Your brain: 'I swear attendings have a sixth sense for detecting when students are about to do something dumb.')"),
                ],
                ChoiceEffect::new().anxiety(25).reputation(-15),
            ),
            stay(
                "'Let me examine the patient for any rashes or physical findings'",
                vec![
                    Line::attending("Dr. Crook raises an eyebrow. 'Eager to examine, I see. But perhaps we should learn more about the history first?'"),
                    Line::attending("'In pediatrics, a detailed history often guides our physical exam. Let's start there.'"),
                    Line::inner("(Your brain: 'Right... history before physical. Med School 101. Nailing it.')"),
                ],
                ChoiceEffect::new(),
            ),
        ],
        invalid: Line::failure(
            "Dr. Crook: 'That wasn't one of the options. Again. Kids deserve better focus.'",
        ),
    }
}

fn systematic_exam() -> Scene {
    Scene {
        name: "systematic-exam".to_string(),
        setup: SceneSetup::Static(vec![
            Line::scenario("You enter the patient's room with Dr. Crook. A miserable-looking 5-year-old boy lies in bed."),
            Line::scenario("His mother looks up anxiously. 'Is there any news, doctors?'"),
            Line::attending("Dr. Crook turns to you expectantly. 'Dr. {name} would like to examine your son.'"),
            Line::inner("(Your brain: 'No pressure. Just don't mess up in front of the kid, the parent, AND Dr. Crook...')"),
        ]),
        setup_findings: vec![],
        setup_items: vec![],
        prompt: "How will you approach the physical exam?".to_string(),
        options: vec![
            advance(
                "'I'll perform a systematic head-to-toe exam focusing on the diagnostic features of pediatric inflammatory conditions'",
                vec![
                    Line::success("Dr. Crook nods approvingly. 'A systematic approach. Very good.'"),
                    Line::ui("Your examination reveals:"),
                    Line::success("• Bilateral conjunctival injection without exudate"),
                    Line::success("• Erythema of the lips with a strawberry tongue appearance"),
                    Line::success("• Polymorphous rash over the trunk"),
                    Line::success("• Erythema and edema of the hands and feet"),
                    Line::success("• A single enlarged right cervical lymph node (approximately 1.5 cm)"),
                    Line::inner("(Your brain: 'These are the classic findings! Febrile kid, rash, red eyes, oral changes, extremity changes, lymphadenopathy...')"),
                ],
                ChoiceEffect::new()
                    .correct(2)
                    .reputation(10)
                    .clue("Mucocutaneous findings: polymorphic rash, conjunctival injection")
                    .clue("Extremity changes: red, edematous hands and feet")
                    .clue("Oral changes: red lips and strawberry tongue")
                    .clue("Unilateral cervical lymphadenopathy >1.5cm")
                    .finding(FindingKind::Exam, "bilateral conjunctival injection")
                    .finding(FindingKind::Exam, "erythema of lips and strawberry tongue")
                    .finding(FindingKind::Exam, "polymorphous rash")
                    .finding(FindingKind::Exam, "erythema and edema of hands and feet")
                    .finding(FindingKind::Exam, "unilateral cervical lymphadenopathy")
                    .item("Photo of polymorphic rash (Added to patient chart)")
                    .item("Photo of hands/feet and oral findings (Added to patient chart)"),
            ),
            stay(
                "Look for specific findings: rashes, oral changes, eye redness, lymph nodes",
                vec![
                    Line::attending("Dr. Crook watches you. 'While those are important areas, a more structured approach would be better.'"),
                    Line::attending("'Remember what we learned about systematic examination in pediatric patients.'"),
                    Line::inner("(Your brain: 'I need to be more organized in my approach to pick up all the findings...')"),
                ],
                ChoiceEffect::new(),
            ),
            stay(
                "Focus primarily on the cardiac and respiratory systems",
                vec![
                    Line::scenario("You focus on auscultating the heart and lungs."),
                    Line::attending("Dr. Crook observes your technique, then gently suggests, 'Perhaps we should be more systematic in our approach.'"),
                    Line::attending("'Remember, in pediatrics, the skin and mucous membranes often hold the diagnostic keys.'"),
                    Line::inner("(Your brain: 'Right... look at the whole patient, not just the vital organs.')"),
                ],
                ChoiceEffect::new(),
            ),
            stay(
                "Ask the mother about recent exposures before examining",
                vec![
                    Line::scenario("You turn to the mother: 'Has he been around anyone sick recently? Any travel?'"),
                    Line::scenario("The mother shakes her head. 'No travel. He was at daycare until the fever started.'"),
                    Line::scenario("'No one else is sick that we know of. He's up-to-date on vaccines.'"),
                    Line::attending("Dr. Crook gives you a look. 'Good background, but perhaps we should examine the patient now?'"),
                    Line::inner("(Your brain: 'Right... I should probably look at the actual patient.')"),
                ],
                ChoiceEffect::new().finding(
                    FindingKind::History,
                    "No travel history, attends daycare, vaccinations up-to-date",
                ),
            ),
        ],
        invalid: Line::failure("Dr. Crook whispers. 'Focus, doctor. The options are right there.'"),
    }
}

fn diagnostic_workup() -> Scene {
    Scene {
        name: "diagnostic-workup".to_string(),
        setup: SceneSetup::WorkupRecap {
            lead_in: vec![Line::attending(
                "Back at the nursing station, Dr. Crook asks, 'So what's your diagnostic approach?'",
            )],
            fever_template: "'We have a 5-year-old with {finding},'".to_string(),
            exam_template: "'Plus physical findings of {findings}.'".to_string(),
            fallback: vec![
                Line::attending("Back at the nursing station, Dr. Crook reviews the patient's presentation."),
                Line::attending("'Let's consider what we know about this febrile 5-year-old.'"),
            ],
            epilogue: vec![Line::inner(
                "(Your brain is racing through differentials: 'Scarlet fever? Measles? Stevens-Johnson? Wait... Kawasaki?')",
            )],
        },
        setup_findings: vec![],
        setup_items: vec![],
        prompt: "What tests would you order?".to_string(),
        options: vec![
            advance(
                "'CBC with differential, CRP, ESR, and echocardiogram'",
                vec![
                    Line::success("Dr. Crook's eyes widen with visible approval."),
                    Line::attending("'Excellent choices. Also consider LFTs and urinalysis. Let's monitor those platelets.'"),
                    Line::inner("(Your brain: 'Wait, did I just... impress Dr. Crook? Is this real life?')"),
                ],
                ChoiceEffect::new()
                    .correct(2)
                    .reputation(15)
                    .clue("Ordered appropriate inflammatory markers and echo")
                    .finding(
                        FindingKind::Workup,
                        "Ordered: CBC with diff, CRP, ESR, LFTs, UA, and echocardiogram",
                    ),
            ),
            stay(
                "'Blood culture, throat culture, and lumbar puncture'",
                vec![
                    Line::failure("Dr. Crook tilts his head. 'Infection workup is reasonable, but lumbar puncture?'"),
                    Line::attending("'No meningeal signs here. Think broader about the constellation of symptoms.'"),
                    Line::inner("(Your brain: 'Great, now I'm the med student who wants to do unnecessary LPs on children...')"),
                ],
                ChoiceEffect::new().reputation(-5),
            ),
            stay(
                "'Rapid strep test and mono spot'",
                vec![
                    Line::failure("'Limited testing for a complex presentation. Think bigger picture, doctor.'"),
                    Line::attending("'This child has multiple systems involved. What might we be missing?'"),
                    Line::inner("(Your brain: 'The number of ways to look incompetent seems infinite...')"),
                ],
                ChoiceEffect::new(),
            ),
            stay(
                "'CT scan of the head and chest X-ray'",
                vec![
                    Line::failure("Dr. Crook raises both eyebrows to stratospheric heights."),
                    Line::attending("'Irradiating a child should never be our first approach. What else could we do?'"),
                    Line::inner("(Your brain: 'Note to self: Don't suggest CT scans for children unless absolutely necessary...')"),
                ],
                ChoiceEffect::new().anxiety(10),
            ),
        ],
        invalid: Line::failure("Dr. Crook sighs. 'Please focus on the options at hand.'"),
    }
}

fn final_diagnosis() -> Scene {
    Scene {
        name: "final-diagnosis".to_string(),
        setup: SceneSetup::Static(vec![
            Line::attending("The next day, Dr. Crook approaches with the test results."),
            Line::ui("📋 LABORATORY RESULTS:"),
            Line::ui("- CRP: 120 mg/L (ref: <5)"),
            Line::ui("- ESR: 80 mm/h (ref: <15)"),
            Line::ui("- WBC: 15.5 x10^9/L with neutrophilia"),
            Line::ui("- Hgb: 10.8 g/dL (mild anemia)"),
            Line::ui("- Platelets: 450,000 (elevated)"),
            Line::ui("- ALT: 85 U/L, AST: 70 U/L (mild transaminitis)"),
            Line::ui("- Echo: Pending"),
            Line::attending("Dr. Crook looks at you expectantly. 'Care to make your diagnosis?'"),
            Line::inner("(Your heart is pounding. 'This is it. Don't mess up now...')"),
        ]),
        setup_findings: vec![crate::story_engine::models::Finding::new(
            FindingKind::Workup,
            "Labs: Elevated CRP/ESR, leukocytosis, mild anemia, thrombocytosis, mild transaminitis",
        )],
        setup_items: vec![],
        prompt: "What's your diagnosis?".to_string(),
        options: vec![
            end(
                "'This patient has Kawasaki Disease'",
                vec![
                    Line::success("Dr. Crook breaks into an approving smile!"),
                    Line::attending("'Excellent diagnosis, doctor! The patient meets the diagnostic criteria for classic Kawasaki Disease.'"),
                    Line::attending("'5+ days of fever plus 4 of the 5 classic criteria: rash, conjunctivitis, oral changes, extremity changes, and cervical lymphadenopathy.'"),
                    Line::attending("'We need to start IVIG and high-dose aspirin ASAP to prevent coronary artery aneurysms.'"),
                    Line::inner("(Your brain: 'I... I did it! I actually diagnosed something correctly!')"),
                ],
                ChoiceEffect::new()
                    .correct(2)
                    .reputation(15)
                    .finding(FindingKind::Diagnosis, "Final diagnosis: Kawasaki Disease")
                    .finding(FindingKind::Diagnosis, "Treatment plan: IVIG and high-dose aspirin"),
                true,
            ),
            stay(
                "'I believe this is Scarlet Fever'",
                vec![
                    Line::failure("Dr. Crook's face falls. 'Close, but Scarlet Fever doesn't explain all findings.'"),
                    Line::attending("'The conjunctival injection, extremity changes, and persistent fever despite appropriate antibiotics point elsewhere.'"),
                    Line::inner("(Your brain: 'So close yet so far... what am I missing?')"),
                ],
                ChoiceEffect::new().reputation(-5),
            ),
            stay(
                "'The patient has Juvenile Idiopathic Arthritis with systemic features'",
                vec![
                    Line::failure("Dr. Crook shakes his head. 'Interesting thought, but not quite right.'"),
                    Line::attending("'No arthritis present, and the mucosal changes and lymphadenopathy suggest something else.'"),
                    Line::inner("(Your brain: 'I swear I read about this somewhere... was it in that review article?')"),
                ],
                ChoiceEffect::new(),
            ),
            stay(
                "'I need more tests before making a diagnosis'",
                vec![
                    Line::failure("Dr. Crook sighs deeply. 'In pediatrics, sometimes we need to act before all data is in.'"),
                    Line::attending("'This child has a time-sensitive condition with risk of serious complications.'"),
                    Line::inner("(Your brain: 'Analysis paralysis strikes again! Make a decision already!')"),
                ],
                ChoiceEffect::new().anxiety(10).reputation(-5),
            ),
        ],
        invalid: Line::failure("'Focus, doctor. This child needs a diagnosis now.'"),
    }
}

fn endings() -> EndingSet {
    EndingSet {
        win_lead: vec![
            Line::success("CONGRATULATIONS! You correctly diagnosed Kawasaki Disease!"),
            Line::attending("Dr. Crook nods approvingly. 'Well done. I'll arrange for IVIG infusion right away.'"),
            Line::attending("'Time is of the essence with KD. Need to prevent those coronary artery aneurysms.'"),
        ],
        top: vec![
            Line::attending("'You know, you might be cut out for pediatrics after all.'"),
            Line::success("You've impressed an attending on rotations - a rare achievement indeed!"),
            Line::inner("(Your brain: 'Is this what validation feels like? I should frame this moment.')"),
        ],
        solid: vec![
            Line::attending("'Not bad for a student. There's hope for you yet.'"),
            Line::success("Dr. Crook gives you a genuine smile and a nod of respect."),
            Line::inner("(Your brain: 'I'm going to ride this high for at least a week.')"),
        ],
        rough: vec![
            Line::attending("'You got there eventually, though it was touch and go for a while.'"),
            Line::attending("'We'll work on your diagnostic approach. That's why you're here to learn.'"),
            Line::inner("(Your brain: 'The important thing is I didn't kill anyone. Progress!')"),
        ],
        loss: vec![
            Line::failure("The patient was transferred to the PICU after developing coronary complications."),
            Line::attending("Dr. Crook looks disappointed. 'We'll discuss this further at your evaluation.'"),
            Line::inner("(Your brain: 'Maybe the hospital cafeteria is hiring...')"),
        ],
        signoff: vec![
            Line::success("Thank you for playing ddxCROOK: KAWASAKI EDITION!"),
            Line::success("Remember, in both pediatrics and coding: careful observation makes all the difference!"),
        ],
    }
}

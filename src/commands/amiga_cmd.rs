use async_trait::async_trait;
use rand::seq::SliceRandom;

use crate::commands::{Command, CommandContext, CommandOutput};
use crate::error::ShellError;
use crate::fs::DeviceKind;

pub struct AmigaCommand;

const BANNER: &str = r#"
       ___              _
      / _ \   _ __ ___ (_) __ _  __ _
     / /_\ \ | '_ ` _ \| |/ _` |/ _` |
    /  _  \  | | | | | | | (_| | (_| |
    \_/ \_/  |_| |_| |_|_|\__, |\__,_|
                          |___/
      "Only Amiga Makes It Possible"
"#;

const FACTS: &[&str] = &[
    "The Amiga was the first multimedia computer with custom chips: Agnus, Denise, and Paula!",
    "AmigaOS featured preemptive multitasking when other systems were still cooperative.",
    "The Amiga could display 4096 colors simultaneously using HAM mode.",
    "Workbench 1.0 was released in 1985, making it one of the first GUI operating systems.",
    "Paula could play 4 PCM channels simultaneously at different frequencies.",
    "Deluxe Paint on Amiga revolutionized digital art and animation in the late 80s and 90s.",
    "Lemmings, Defender of the Crown, and Shadow of the Beast debuted on Amiga.",
    "The Video Toaster made Amiga the king of video production in TV studios worldwide.",
    "The Copper chip could change colors mid-screen, creating stunning visual effects.",
    "The CLI was more powerful than DOS and inspired modern terminals.",
];

const DEMO_GROUPS: &[&str] = &[
    "Fairlight", "Kefrens", "The Silents", "Razor 1911", "Alcatraz",
    "Sanity", "Spaceballs", "Red Sector Inc.", "Crusaders", "Tristar",
];

const WORKBENCH_COLORS: &[&str] = &["Blue/Orange (WB 1.x)", "Grey/Blue (WB 2.x)", "Grey/White (WB 3.x)"];

const QUOTES: &[&str] = &[
    "The Amiga: Because creativity shouldn't have limits.",
    "Multitasking was not a luxury, it was an Amiga standard.",
    "Before there was multimedia, there was Amiga.",
    "The computer that made the impossible, possible.",
    "AmigaOS: The operating system that was ahead of its time.",
];

const SCROLLER: &[&str] = &[
    "WELCOME TO THE AMIGA DEMO SCENE... THE GREATEST COMPUTER EVER MADE...",
    "GREETINGS TO ALL AMIGA SCENERS WORLDWIDE... KEEP THE SPIRIT ALIVE...",
    "CODED WITH LOVE FOR THE AMIGA COMMUNITY... 68000 FOREVER...",
    "PAULA PLAYS THE SWEETEST MUSIC... AGNUS DRAWS THE BEST GRAPHICS...",
    "KICKSTART ROM... AUTOCONFIG... GURU MEDITATION... CLASSIC AMIGA MEMORIES...",
];

#[async_trait]
impl Command for AmigaCommand {
    fn name(&self) -> &'static str { "amiga" }

    fn summary(&self) -> &'static str { "Amiga easter egg" }

    fn usage(&self) -> &'static str { "AMIGA" }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        let mut rng = rand::thread_rng();
        let pick = |items: &[&'static str], rng: &mut rand::rngs::ThreadRng| {
            items.choose(rng).copied().unwrap_or_default()
        };

        let mut stdout = String::from(BANNER);
        stdout.push_str("\nWSA Terminal - Windows Subsystem for Amiga\n");
        stdout.push_str("Bringing back the magic of AmigaOS to modern systems!\n");
        stdout.push_str(&format!("\nDid you know? {}\n", pick(FACTS, &mut rng)));
        let greeted: Vec<&str> = DEMO_GROUPS.choose_multiple(&mut rng, 3).copied().collect();
        stdout.push_str(&format!(
            "\nGreetings to the demo scene: {} and all the others!\n",
            greeted.join(", ")
        ));

        stdout.push_str("\nVolumes Available:\n");
        for device in ctx.session.namespace().devices().iter() {
            let role = match (&device.kind, &device.label) {
                (DeviceKind::RealOverlay { .. }, Some(label)) => label.as_str(),
                (DeviceKind::RealOverlay { .. }, None) => "Host Volume",
                (DeviceKind::Virtual, _) if device.commands => "Commands Directory",
                (DeviceKind::Virtual, _) => "Virtual Volume",
            };
            stdout.push_str(&format!("  {} ({})\n", device.name(), role));
        }

        stdout.push_str(&format!("\nWorkbench Color Scheme: {}\n", pick(WORKBENCH_COLORS, &mut rng)));
        stdout.push_str(&format!("\n\"{}\"\n", pick(QUOTES, &mut rng)));
        stdout.push_str(&format!("\n>>> {} <<<\n", pick(SCROLLER, &mut rng)));
        stdout.push_str("\nType HELP for available commands or start with: CD DH0:\n");

        Ok(CommandOutput::text(stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::setup;

    #[tokio::test]
    async fn test_amiga_lists_volumes_and_one_fact() {
        let (interp, mut session, _tmp) = setup();
        let out = interp.execute(&mut session, "amiga").await.unwrap();
        assert!(out.text.contains("\"Only Amiga Makes It Possible\""));
        assert!(out.text.contains("  C: (Commands Directory)\n"));
        assert!(out.text.contains("  DH0: (Host Drive)\n"));
        assert_eq!(FACTS.iter().filter(|f| out.text.contains(*f)).count(), 1);
        assert_eq!(DEMO_GROUPS.iter().filter(|g| out.text.contains(*g)).count(), 3);
    }
}

use nav_core::Typewriter;

#[test]
fn reveals_the_whole_string_in_length_ticks() {
    let mut tw = Typewriter::new();
    tw.set_text("引擎就绪");
    let mut out = String::new();
    let mut completions = 0;
    for i in 0..4 {
        let t = tw.tick().expect("tick within the string");
        out.push(t.revealed.unwrap());
        if t.completed {
            completions += 1;
            assert_eq!(i, 3, "completion must land on the final character");
        }
    }
    assert_eq!(out, "引擎就绪");
    assert_eq!(completions, 1);
    assert!(tw.is_done());
    assert!(tw.tick().is_none(), "no callbacks after completion");
}

#[test]
fn blip_plays_on_every_second_non_space_character() {
    // Parity counter increments per revealed char; the blip fires when the
    // counter is even and the character is not a blank.
    let mut tw = Typewriter::new();
    tw.set_text("abc def");
    let mut got = Vec::new();
    while let Some(t) = tw.tick() {
        got.push((t.revealed.unwrap(), t.play_tick));
    }
    assert_eq!(
        got,
        vec![
            ('a', false), // counter 1
            ('b', true),  // counter 2
            ('c', false), // counter 3
            (' ', false), // counter 4, blank suppressed
            ('d', false), // counter 5
            ('e', true),  // counter 6
            ('f', false), // counter 7
        ]
    );
}

#[test]
fn changing_text_mid_reveal_restarts_from_zero() {
    let mut tw = Typewriter::new();
    tw.set_text("first transmission");
    for _ in 0..5 {
        tw.tick();
    }
    tw.set_text("second");
    assert_eq!(tw.visible(), "");
    let mut out = String::new();
    while let Some(t) = tw.tick() {
        out.push(t.revealed.unwrap());
    }
    assert_eq!(out, "second");
    assert!(
        !out.contains("first"),
        "abandoned string must never deliver characters"
    );
}

#[test]
fn empty_text_completes_exactly_once() {
    let mut tw = Typewriter::new();
    tw.set_text("");
    let t = tw.tick().expect("one completion tick");
    assert!(t.completed);
    assert!(t.revealed.is_none());
    assert!(!t.play_tick);
    assert!(tw.tick().is_none());
}

#[test]
fn fresh_typewriter_is_quiescent() {
    let mut tw = Typewriter::new();
    assert!(tw.is_done());
    assert!(tw.tick().is_none());
    assert_eq!(tw.visible(), "");
}

#[test]
fn visible_tracks_the_revealed_prefix() {
    let mut tw = Typewriter::new();
    tw.set_text("orbit");
    tw.tick();
    tw.tick();
    assert_eq!(tw.visible(), "or");
    tw.tick();
    assert_eq!(tw.visible(), "orb");
}

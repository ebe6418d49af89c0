use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crossterm::event::{Event, KeyCode, KeyEvent};

use term_tetris::input::{fold_event, latest_command};
use term_tetris::types::Command;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::from(code))
}

#[test]
fn folding_key_events_does_not_allocate() {
    let keys = [
        KeyCode::Left,
        KeyCode::Char('e'),
        KeyCode::Enter,
        KeyCode::Char(' '),
        KeyCode::Down,
    ];

    let mut seen = None;
    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            let mut latest = None;
            for code in keys {
                latest = fold_event(latest, press(code));
            }
            seen = latest;
        }
    });

    assert_eq!(seen, Some(Command::SoftDrop));
    assert!(allocs == 0);
}

#[test]
fn latest_command_over_an_array_does_not_allocate() {
    let mut seen = None;
    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            seen = latest_command([
                press(KeyCode::Char('q')),
                Event::FocusGained,
                press(KeyCode::Char('p')),
            ]);
        }
    });

    assert_eq!(seen, Some(Command::LevelUp));
    assert!(allocs == 0);
}

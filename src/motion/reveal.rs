use super::easing::Easing;
use super::stagger;
use super::trigger::{ElementBox, TriggerPoint};
use super::visual::VisualState;

/// What happens when the user scrolls back above the trigger point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Stay revealed forever.
    Once,
    /// Restore the initial state, and replay on the next crossing.
    Reversible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Unarmed,
    Watching,
    Triggered,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play,
    Reverse,
}

/// What binding a group should do, given what the page can offer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BindPlan {
    /// Nothing to animate.
    Skip,
    /// Jump straight to this state and never observe.
    Instant(VisualState),
    /// Apply the initial state and start watching the trigger.
    Arm,
}

/// Full description of one reveal group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    pub from: VisualState,
    pub to: VisualState,
    /// Seconds per element.
    pub duration: f64,
    /// Seconds between successive elements.
    pub stagger: f64,
    /// Seconds before the first element starts.
    pub delay_children: f64,
    pub easing: Easing,
    pub trigger: TriggerPoint,
    pub policy: Policy,
}

impl RevealSpec {
    /// Rise into place once at least 30% of the group is on screen.
    pub const fn rise_in_view(distance: f64) -> Self {
        RevealSpec {
            from: VisualState::rise(distance),
            to: VisualState::IDENTITY,
            duration: 0.6,
            stagger: 0.2,
            delay_children: 0.3,
            easing: Easing::EaseOut,
            trigger: TriggerPoint::Amount(0.3),
            policy: Policy::Once,
        }
    }

    /// A shorter, tighter rise for headings and small cards.
    pub const fn rise_small() -> Self {
        Self::rise_in_view(20.0).duration(0.5).stagger(0.1, 0.1)
    }

    /// Like [`RevealSpec::rise_in_view`] but plays as soon as it is bound.
    pub const fn rise_on_mount(distance: f64) -> Self {
        RevealSpec {
            trigger: TriggerPoint::Mount,
            ..Self::rise_in_view(distance)
        }
    }

    pub const fn from_state(self, from: VisualState) -> Self {
        RevealSpec { from, ..self }
    }

    pub const fn duration(self, duration: f64) -> Self {
        RevealSpec { duration, ..self }
    }

    pub const fn stagger(self, stagger: f64, delay_children: f64) -> Self {
        RevealSpec { stagger, delay_children, ..self }
    }

    pub const fn easing(self, easing: Easing) -> Self {
        RevealSpec { easing, ..self }
    }

    pub const fn trigger(self, trigger: TriggerPoint, policy: Policy) -> Self {
        RevealSpec { trigger, policy, ..self }
    }

    /// Per-element start offsets for `command` over a group of `count`.
    pub fn delays(&self, command: Command, count: usize) -> Vec<f64> {
        match command {
            Command::Play => stagger::play_delays(count, self.delay_children, self.stagger),
            Command::Reverse => stagger::reverse_delays(count, self.stagger),
        }
    }

    /// Decides how to bind a group of `target_count` elements. Whenever the
    /// group cannot be animated it lands directly in its final state.
    pub fn plan(&self, target_count: usize, animate: bool, capable: bool) -> BindPlan {
        if target_count == 0 {
            BindPlan::Skip
        } else if !animate || !capable {
            BindPlan::Instant(self.to)
        } else {
            BindPlan::Arm
        }
    }

    /// The state a group rests in after `command` has finished.
    pub fn target(&self, command: Command) -> VisualState {
        match command {
            Command::Play => self.to,
            Command::Reverse => self.from,
        }
    }
}

/// Scroll state machine for one reveal group.
///
/// `Unarmed -> Watching -> Triggered`, where `Triggered` is terminal under
/// [`Policy::Once`] and falls back to `Watching` under
/// [`Policy::Reversible`] when the trigger point is crossed upwards.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealMachine {
    trigger: TriggerPoint,
    policy: Policy,
    phase: Phase,
}

impl RevealMachine {
    pub fn new(trigger: TriggerPoint, policy: Policy) -> Self {
        Self {
            trigger,
            policy,
            phase: Phase::Unarmed,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn arm(&mut self) {
        if self.phase == Phase::Unarmed {
            self.phase = Phase::Watching;
        }
    }

    /// Stops reacting to observations. Used when the group is torn down.
    pub fn disarm(&mut self) {
        self.phase = Phase::Unarmed;
    }

    /// No further observation can produce a command.
    pub fn is_settled(&self) -> bool {
        self.phase == Phase::Triggered && self.policy == Policy::Once
    }

    /// Feeds the trigger element's current geometry to the machine.
    pub fn observe(&mut self, element: ElementBox, viewport_height: f64) -> Option<Command> {
        let past = self.trigger.is_past(element, viewport_height);
        match (self.phase, past) {
            (Phase::Watching, true) => {
                self.phase = Phase::Triggered;
                Some(Command::Play)
            }
            (Phase::Triggered, false) if self.policy == Policy::Reversible => {
                self.phase = Phase::Watching;
                Some(Command::Reverse)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 1000.0;

    fn at(top: f64) -> ElementBox {
        ElementBox::new(top, 400.0)
    }

    #[test]
    fn unarmed_ignores_geometry() {
        let mut machine = RevealMachine::new(TriggerPoint::ViewportLine(0.8), Policy::Once);
        assert_eq!(machine.observe(at(0.0), VIEWPORT), None);
        assert_eq!(machine.phase(), Phase::Unarmed);
    }

    #[test]
    fn plays_on_crossing() {
        let mut machine = RevealMachine::new(TriggerPoint::ViewportLine(0.8), Policy::Once);
        machine.arm();
        assert_eq!(machine.observe(at(900.0), VIEWPORT), None);
        assert_eq!(machine.phase(), Phase::Watching);
        assert_eq!(machine.observe(at(790.0), VIEWPORT), Some(Command::Play));
        assert_eq!(machine.phase(), Phase::Triggered);
        // Further downward scrolling is a no-op
        assert_eq!(machine.observe(at(100.0), VIEWPORT), None);
    }

    #[test]
    fn once_never_reverts() {
        let mut machine = RevealMachine::new(TriggerPoint::ViewportLine(0.8), Policy::Once);
        machine.arm();
        assert_eq!(machine.observe(at(700.0), VIEWPORT), Some(Command::Play));
        assert!(machine.is_settled());
        for top in [900.0, 1200.0, 700.0, 2000.0] {
            assert_eq!(machine.observe(at(top), VIEWPORT), None);
        }
        assert_eq!(machine.phase(), Phase::Triggered);
    }

    #[test]
    fn reversible_restores_and_replays() {
        let mut machine = RevealMachine::new(TriggerPoint::ViewportLine(0.8), Policy::Reversible);
        machine.arm();
        assert_eq!(machine.observe(at(700.0), VIEWPORT), Some(Command::Play));
        assert!(!machine.is_settled());
        assert_eq!(machine.observe(at(900.0), VIEWPORT), Some(Command::Reverse));
        assert_eq!(machine.phase(), Phase::Watching);
        assert_eq!(machine.observe(at(950.0), VIEWPORT), None);
        assert_eq!(machine.observe(at(700.0), VIEWPORT), Some(Command::Play));
    }

    #[test]
    fn already_past_on_arm_plays_immediately() {
        let mut machine = RevealMachine::new(TriggerPoint::Amount(0.3), Policy::Reversible);
        machine.arm();
        assert_eq!(machine.observe(at(-3000.0), VIEWPORT), Some(Command::Play));
    }

    #[test]
    fn mount_trigger_plays_on_first_observation() {
        let mut machine = RevealMachine::new(TriggerPoint::Mount, Policy::Once);
        machine.arm();
        assert_eq!(machine.observe(at(5000.0), VIEWPORT), Some(Command::Play));
        assert!(machine.is_settled());
    }

    #[test]
    fn disarmed_machine_goes_quiet() {
        let mut machine = RevealMachine::new(TriggerPoint::ViewportLine(0.8), Policy::Reversible);
        machine.arm();
        machine.observe(at(700.0), VIEWPORT);
        machine.disarm();
        assert_eq!(machine.observe(at(900.0), VIEWPORT), None);
        assert_eq!(machine.observe(at(700.0), VIEWPORT), None);
    }

    #[test]
    fn scenario_three_items_at_eighty_percent() {
        let spec = RevealSpec::rise_in_view(50.0)
            .stagger(0.2, 0.0)
            .trigger(TriggerPoint::Amount(0.8), Policy::Once);
        let mut machine = RevealMachine::new(spec.trigger, spec.policy);
        machine.arm();

        let trigger_el = |visible: f64| ElementBox::new(VIEWPORT - visible * 100.0, 100.0);
        assert_eq!(machine.observe(trigger_el(0.79), VIEWPORT), None);
        let command = machine.observe(trigger_el(0.81), VIEWPORT).expect("should trigger");
        assert_eq!(command, Command::Play);

        let delays = spec.delays(command, 3);
        let expected = [0.0, 0.2, 0.4];
        for (delay, want) in delays.iter().zip(expected) {
            assert!((delay - want).abs() < 1e-9);
        }
        assert_eq!(spec.target(command), VisualState::IDENTITY);
    }

    #[test]
    fn reverse_targets_initial_state() {
        let spec = RevealSpec::rise_in_view(30.0);
        assert_eq!(spec.target(Command::Reverse), VisualState::rise(30.0));
        assert_eq!(spec.delays(Command::Reverse, 2).len(), 2);
    }

    #[test]
    fn empty_group_is_skipped() {
        let spec = RevealSpec::rise_in_view(30.0);
        assert_eq!(spec.plan(0, true, true), BindPlan::Skip);
        assert_eq!(spec.plan(0, false, false), BindPlan::Skip);
    }

    #[test]
    fn unanimated_groups_land_in_final_state() {
        let spec = RevealSpec::rise_in_view(30.0).from_state(VisualState::rise(30.0).with_scale(0.5));
        for (animate, capable) in [(false, true), (true, false), (false, false)] {
            match spec.plan(3, animate, capable) {
                BindPlan::Instant(state) => assert_eq!(state, spec.to),
                other => panic!("animate={} capable={} gave {:?}", animate, capable, other),
            }
        }
        assert_eq!(spec.plan(3, true, true), BindPlan::Arm);
    }

    #[test]
    fn once_group_settles_on_a_later_scroll() {
        let mut machine = RevealMachine::new(TriggerPoint::ViewportLine(0.8), Policy::Once);
        machine.arm();
        assert_eq!(machine.observe(at(1500.0), VIEWPORT), None);
        assert!(!machine.is_settled());
        assert_eq!(machine.observe(at(600.0), VIEWPORT), Some(Command::Play));
        assert!(machine.is_settled());
    }

    #[test]
    fn reversible_group_never_settles() {
        let mut machine = RevealMachine::new(TriggerPoint::ViewportLine(0.8), Policy::Reversible);
        machine.arm();
        for _ in 0..3 {
            assert_eq!(machine.observe(at(600.0), VIEWPORT), Some(Command::Play));
            assert!(!machine.is_settled());
            assert_eq!(machine.observe(at(900.0), VIEWPORT), Some(Command::Reverse));
        }
    }

    #[test]
    fn mount_preset_only_changes_trigger() {
        let spec = RevealSpec::rise_on_mount(50.0);
        assert_eq!(spec.trigger, TriggerPoint::Mount);
        assert_eq!(spec.from, RevealSpec::rise_in_view(50.0).from);
    }
}

use crate::encounter::GameMaster;
use crate::engine::OutcomeProvider;
use crate::entity::Hero;
use crate::world::GratefulPerson;

impl<P: OutcomeProvider> GameMaster<P> {
    /// Collect a gift from each grateful person and write the list into the journal
    ///
    /// The journal is written exactly once, even when nobody came. Returns
    /// the logged list (`"<gift>: <value>"` entries joined by `", "`).
    pub fn pay_tribute(&mut self, grateful_people: &[GratefulPerson], hero: &mut Hero) -> String {
        let mut entries = Vec::with_capacity(grateful_people.len());

        for person in grateful_people {
            let gift = person.give_gift();
            entries.push(format!("{}: {}", gift.name, gift.value));
            tracing::debug!("{} offers {} to {}", person.name, gift.name, hero.name);
            self.provider.add_gift_to_hero_treasure_chest(hero, gift);
        }

        let list = entries.join(", ");
        self.provider.log_gifts_in_journal(hero, &list);
        list
    }
}

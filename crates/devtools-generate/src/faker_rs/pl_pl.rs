//! Polish name tables. `fake` ships no Polish locale.

pub(crate) const FIRST_NAMES: &[&str] = &[
    "Adam", "Agnieszka", "Aleksandra", "Andrzej", "Anna", "Barbara", "Bartosz", "Beata",
    "Dariusz", "Dorota", "Ewa", "Grzegorz", "Halina", "Jakub", "Jan", "Janina", "Jerzy",
    "Joanna", "Józef", "Julia", "Kamil", "Katarzyna", "Krystyna", "Krzysztof", "Łukasz",
    "Maciej", "Magdalena", "Małgorzata", "Marcin", "Marek", "Maria", "Mateusz", "Michał",
    "Monika", "Natalia", "Paweł", "Piotr", "Rafał", "Stanisław", "Tadeusz", "Tomasz",
    "Wiktoria", "Wojciech", "Zofia", "Zbigniew",
];

pub(crate) const LAST_NAMES: &[&str] = &[
    "Nowak", "Kowalski", "Wiśniewski", "Wójcik", "Kowalczyk", "Kamiński", "Lewandowski",
    "Zieliński", "Szymański", "Woźniak", "Dąbrowski", "Kozłowski", "Jankowski", "Mazur",
    "Kwiatkowski", "Krawczyk", "Piotrowski", "Grabowski", "Nowakowski", "Pawłowski",
    "Michalski", "Nowicki", "Adamczyk", "Dudek", "Zając", "Wieczorek", "Jabłoński", "Król",
    "Majewski", "Olszewski", "Jaworski", "Wróbel", "Malinowski", "Pawlak", "Witkowski",
    "Walczak", "Stępień", "Górski", "Rutkowski", "Michalak",
];

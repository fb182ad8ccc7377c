//! Training catalog for the local fallback responder
//!
//! A fixed set of question/answer pairs covering the topics students ask
//! about most. Each pair becomes one intent in the classifier; the catalog is
//! compiled into the classifier once per process and never changes at
//! runtime.

use crate::models::TrainingPair;

/// The fixed training catalog
pub const TRAINING_PAIRS: &[TrainingPair] = &[
    TrainingPair {
        question: "what is big o notation",
        answer: "Big-O notation describes how an algorithm's running time or memory grows as \
            the input size grows, keeping only the dominant term. For example, a single loop \
            over n items is O(n), a nested loop is O(n^2), and repeatedly halving the input \
            is O(log n). It describes the growth trend, not the exact running time.",
    },
    TrainingPair {
        question: "what is time complexity",
        answer: "Time complexity measures how the number of operations an algorithm performs \
            scales with input size n. It is usually stated in Big-O form for the worst case, \
            such as O(n) for a linear scan or O(n log n) for an efficient sort.",
    },
    TrainingPair {
        question: "what is space complexity",
        answer: "Space complexity measures how much extra memory an algorithm needs as a \
            function of input size, ignoring the input itself. An in-place swap uses O(1) \
            extra space; building a copy of the input uses O(n).",
    },
    TrainingPair {
        question: "difference between array and linked list",
        answer: "Arrays store elements contiguously, so indexing is O(1) but inserting in the \
            middle is O(n). Linked lists store nodes with pointers, so insertion or deletion \
            at a known node is O(1) but reaching an index is O(n). Arrays are also much more \
            cache-friendly in practice.",
    },
    TrainingPair {
        question: "what is a hash map and how does it work",
        answer: "A hash map stores key-value pairs in an array of buckets. A hash function \
            maps each key to a bucket index, giving O(1) average lookup, insert, and delete. \
            Collisions are handled with chaining or open addressing, and the table resizes \
            when its load factor grows too high.",
    },
    TrainingPair {
        question: "what is a stack",
        answer: "A stack is a last-in-first-out (LIFO) structure with O(1) push and pop. It \
            underlies function calls, undo histories, expression evaluation, and \
            depth-first traversal.",
    },
    TrainingPair {
        question: "what is a queue",
        answer: "A queue is a first-in-first-out (FIFO) structure with O(1) enqueue and \
            dequeue. It drives breadth-first search, schedulers, and buffering. A deque \
            generalizes it with O(1) operations at both ends.",
    },
    TrainingPair {
        question: "what is a binary search tree",
        answer: "A binary search tree keeps keys ordered: everything in a node's left subtree \
            is smaller and everything in the right subtree is larger. Search, insert, and \
            delete take O(h) time, which is O(log n) when the tree is balanced and O(n) when \
            it degenerates into a chain.",
    },
    TrainingPair {
        question: "what is a balanced tree avl red black",
        answer: "Balanced search trees such as AVL and red-black trees rebalance themselves \
            on insert and delete so their height stays O(log n), guaranteeing O(log n) \
            search, insert, and delete in the worst case. AVL trees balance more strictly \
            (faster lookups), red-black trees rebalance less often (faster updates).",
    },
    TrainingPair {
        question: "what is a heap priority queue",
        answer: "A heap is a complete binary tree in which every parent is no larger (min-heap) \
            or no smaller (max-heap) than its children, stored compactly in an array. It gives \
            O(1) access to the minimum or maximum and O(log n) insert and extract, which is \
            exactly what a priority queue needs.",
    },
    TrainingPair {
        question: "what is a graph",
        answer: "A graph is a set of vertices connected by edges, which may be directed or \
            undirected and weighted or unweighted. Store it as an adjacency list (O(V+E) \
            space, good for sparse graphs) or an adjacency matrix (O(V^2) space, O(1) edge \
            checks).",
    },
    TrainingPair {
        question: "what is a trie prefix tree",
        answer: "A trie stores strings character by character along its edges, so all words \
            sharing a prefix share a path. Insert and lookup take O(L) for a word of length \
            L, independent of how many words are stored, which makes tries ideal for \
            autocomplete and prefix queries.",
    },
    TrainingPair {
        question: "what is binary search",
        answer: "Binary search finds a target in a sorted array by comparing against the \
            middle element and discarding half the remaining range each step, taking \
            O(log n) time. The classic pitfalls are off-by-one mistakes in the bounds and \
            computing the midpoint with possible overflow; use low + (high - low) / 2.",
    },
    TrainingPair {
        question: "how does merge sort work",
        answer: "Merge sort recursively splits the array in half, sorts each half, and merges \
            the two sorted halves in linear time, for O(n log n) in every case and O(n) \
            extra space. It is stable, which matters when sorting records by multiple keys.",
    },
    TrainingPair {
        question: "how does quicksort work",
        answer: "Quicksort picks a pivot, partitions the array into elements below and above \
            the pivot, and recurses on both sides. Average time is O(n log n) with O(log n) \
            stack space; a consistently bad pivot gives the O(n^2) worst case, which random \
            pivot selection makes vanishingly unlikely.",
    },
    TrainingPair {
        question: "what sorting algorithm should i use",
        answer: "In practice, use your language's built-in sort: it is typically an \
            introsort or timsort hybrid running in O(n log n). Reach for counting or radix \
            sort when keys are small integers (O(n + k)), and insertion sort for tiny or \
            nearly sorted inputs.",
    },
    TrainingPair {
        question: "what is bubble sort",
        answer: "Bubble sort repeatedly sweeps the array swapping adjacent out-of-order \
            pairs until a sweep makes no swaps. It is O(n^2) time and O(1) space, useful \
            mainly as a teaching example; insertion sort beats it in practice.",
    },
    TrainingPair {
        question: "difference between bfs and dfs",
        answer: "BFS explores a graph level by level using a queue and finds shortest paths \
            in unweighted graphs; DFS dives as deep as possible first using a stack or \
            recursion and suits cycle detection, topological sorting, and connectivity. \
            Both run in O(V + E).",
    },
    TrainingPair {
        question: "how does dijkstra algorithm work",
        answer: "Dijkstra's algorithm finds shortest paths from a source in a graph with \
            non-negative edge weights. It repeatedly extracts the unvisited vertex with the \
            smallest tentative distance from a priority queue and relaxes its edges, running \
            in O((V + E) log V) with a binary heap. Negative edges break it; use \
            Bellman-Ford instead.",
    },
    TrainingPair {
        question: "what is topological sort",
        answer: "A topological sort orders the vertices of a directed acyclic graph so every \
            edge points forward in the order. Compute it with DFS finish times or Kahn's \
            algorithm (repeatedly removing zero in-degree vertices) in O(V + E). If you \
            cannot consume every vertex, the graph has a cycle.",
    },
    TrainingPair {
        question: "what is dynamic programming",
        answer: "Dynamic programming solves problems whose subproblems overlap by computing \
            each subproblem once and reusing the result, either top-down with memoization \
            or bottom-up with a table. Start by defining the state precisely, then write the \
            recurrence, then decide the evaluation order.",
    },
    TrainingPair {
        question: "what is memoization",
        answer: "Memoization caches a function's results keyed by its arguments so repeated \
            calls with the same inputs return instantly. Applied to a recursive solution \
            with overlapping subproblems, it turns exponential time into the number of \
            distinct states times the work per state.",
    },
    TrainingPair {
        question: "what is recursion and when to use it",
        answer: "Recursion solves a problem by reducing it to smaller instances of itself, \
            with a base case to stop. It fits naturally on trees, divide-and-conquer, and \
            backtracking. Each call consumes stack space, so very deep recursion may need \
            an explicit stack or iteration.",
    },
    TrainingPair {
        question: "what is backtracking",
        answer: "Backtracking incrementally builds candidate solutions and abandons a partial \
            candidate as soon as it cannot lead to a valid solution, undoing the last choice \
            and trying the next. It powers N-queens, Sudoku, subsets, and permutations; \
            pruning early is what keeps it fast.",
    },
    TrainingPair {
        question: "what is a greedy algorithm",
        answer: "A greedy algorithm makes the locally best choice at each step and never \
            reconsiders. It is fast but only correct when the problem has the greedy-choice \
            property, as in interval scheduling by earliest finish time, Huffman coding, \
            and minimum spanning trees. When greedy fails, dynamic programming is the \
            usual fallback.",
    },
    TrainingPair {
        question: "what is the two pointer technique",
        answer: "The two-pointer technique moves two indices through a sequence in a \
            coordinated way, such as from both ends of a sorted array inward, to replace a \
            nested O(n^2) scan with O(n). Classic uses: pair-sum in a sorted array, \
            removing duplicates, and container-with-most-water.",
    },
    TrainingPair {
        question: "what is sliding window",
        answer: "A sliding window maintains a contiguous range over a sequence, extending \
            the right end and shrinking the left while some invariant holds. It solves \
            longest-substring-without-repeats and minimum-window-substring style problems \
            in O(n), because each element enters and leaves the window once.",
    },
    TrainingPair {
        question: "what is a prefix sum",
        answer: "A prefix-sum array stores cumulative totals so any range sum falls out as \
            prefix[r] - prefix[l-1] in O(1) after O(n) preprocessing. The same idea extends \
            to 2D grids and to XOR or product ranges.",
    },
    TrainingPair {
        question: "what is union find disjoint set",
        answer: "Union-Find maintains a partition of elements into disjoint sets with two \
            operations: find the representative of an element's set, and union two sets. \
            With path compression and union by rank both run in effectively constant \
            amortized time, which makes it the backbone of Kruskal's algorithm and \
            connectivity queries.",
    },
    TrainingPair {
        question: "what is a minimum spanning tree",
        answer: "A minimum spanning tree connects every vertex of a weighted undirected \
            graph with the least total edge weight and no cycles. Kruskal's algorithm sorts \
            edges and unions components; Prim's grows one tree with a priority queue; both \
            run in O(E log V).",
    },
    TrainingPair {
        question: "how to detect a cycle in a linked list",
        answer: "Use Floyd's tortoise-and-hare: advance one pointer by one node and another \
            by two. If they ever meet, the list has a cycle; to find the cycle's start, \
            reset one pointer to the head and advance both one step at a time until they \
            meet again. O(n) time, O(1) space.",
    },
    TrainingPair {
        question: "how to reverse a linked list",
        answer: "Walk the list keeping three pointers: previous, current, and next. At each \
            node, save next, point current back at previous, then advance. When current \
            runs off the end, previous is the new head. O(n) time, O(1) space.",
    },
    TrainingPair {
        question: "how to find the middle of a linked list",
        answer: "Advance a slow pointer by one node and a fast pointer by two; when the fast \
            pointer reaches the end, the slow pointer is at the middle. One pass, O(1) \
            space.",
    },
    TrainingPair {
        question: "what is tree traversal inorder preorder postorder",
        answer: "Preorder visits node, left, right (good for copying a tree); inorder visits \
            left, node, right (yields sorted order in a BST); postorder visits left, right, \
            node (good for deleting or evaluating). Level-order uses a queue instead of \
            recursion. All are O(n).",
    },
    TrainingPair {
        question: "what is a complete vs full binary tree",
        answer: "A full binary tree gives every node zero or two children. A complete binary \
            tree fills every level except possibly the last, which fills left to right; \
            that shape is what lets heaps live in a plain array.",
    },
    TrainingPair {
        question: "what is lowest common ancestor",
        answer: "The lowest common ancestor of two nodes is the deepest node that has both \
            as descendants. In a BST, walk from the root until the two values split across \
            a node. In a general tree, recurse: a node returning hits from both subtrees is \
            the LCA. O(h) time.",
    },
    TrainingPair {
        question: "what is binary search on the answer",
        answer: "When a yes/no feasibility check is monotonic in some parameter (if x works, \
            every larger x works), you can binary search the parameter itself instead of an \
            array. Examples: minimum ship capacity, Koko eating bananas, minimizing a \
            maximum. Complexity is O(check) times O(log range).",
    },
    TrainingPair {
        question: "what is bit manipulation xor tricks",
        answer: "XOR is associative and self-canceling (x ^ x = 0), so XOR-ing a whole array \
            finds the element that appears an odd number of times. Other staples: n & (n-1) \
            clears the lowest set bit, n & -n isolates it, and shifts multiply or divide by \
            powers of two.",
    },
    TrainingPair {
        question: "what is a matrix spiral or rotation problem",
        answer: "Grid-manipulation problems are mostly careful index bookkeeping. For a \
            90-degree rotation, transpose and then reverse each row. For a spiral, maintain \
            four shrinking boundaries (top, bottom, left, right) and walk them in order.",
    },
    TrainingPair {
        question: "how to merge intervals",
        answer: "Sort intervals by start, then sweep: if the current interval starts before \
            the last merged one ends, extend the merged end; otherwise start a new group. \
            O(n log n) for the sort, O(n) for the sweep.",
    },
    TrainingPair {
        question: "what is the knapsack problem",
        answer: "The 0/1 knapsack asks for the most valuable subset of items within a weight \
            budget, where each item is taken or not. Dynamic programming over (item, \
            remaining capacity) solves it in O(n * W); iterate capacity downward to keep \
            each item single-use. The unbounded variant iterates capacity upward.",
    },
    TrainingPair {
        question: "what is longest common subsequence",
        answer: "LCS finds the longest sequence appearing in both strings in order, not \
            necessarily contiguously. The DP is O(m * n): if the characters match, extend \
            the diagonal; otherwise take the best of skipping a character from either \
            string. Edit distance has the same table structure.",
    },
    TrainingPair {
        question: "what is kadane algorithm maximum subarray",
        answer: "Kadane's algorithm scans once, tracking the best sum of a subarray ending \
            at the current index: either extend the previous sum or restart at the current \
            element. The answer is the maximum seen. O(n) time, O(1) space.",
    },
    TrainingPair {
        question: "how to find duplicates in an array",
        answer: "A hash set gives O(n) time and O(n) space: insert each element and report \
            anything already present. Sorting first gives O(n log n) time with O(1) extra \
            space. For values constrained to 1..n, Floyd's cycle detection finds the \
            duplicate in O(n) time and O(1) space.",
    },
    TrainingPair {
        question: "what is a monotonic stack",
        answer: "A monotonic stack keeps its elements in sorted order by popping everything \
            that violates the order before each push. Each element is pushed and popped at \
            most once, so next-greater-element, daily-temperatures, and \
            largest-rectangle-in-histogram all run in O(n).",
    },
    TrainingPair {
        question: "what is quickselect kth largest",
        answer: "Quickselect partitions like quicksort but recurses only into the side that \
            contains the target rank, finding the k-th element in O(n) average time. A \
            size-k min-heap is the simpler alternative at O(n log k), useful for streams.",
    },
    TrainingPair {
        question: "how to check if a string is a palindrome or anagram",
        answer: "Palindrome: compare characters with two pointers moving inward, O(n). \
            Anagram: compare 26-entry character counts (or a hash map for general \
            alphabets), O(n); sorting both strings also works at O(n log n).",
    },
    TrainingPair {
        question: "what is string matching kmp",
        answer: "KMP precomputes, for each prefix of the pattern, the longest proper prefix \
            that is also a suffix. On a mismatch the pattern shifts by that table instead of \
            restarting, giving O(n + m) matching with no backtracking over the text. \
            Rabin-Karp's rolling hash is the common alternative.",
    },
    TrainingPair {
        question: "what is amortized analysis",
        answer: "Amortized analysis averages an operation's cost over a worst-case sequence \
            of operations. A dynamic array's push is the standard example: occasional O(n) \
            resizes spread over n pushes still average O(1) per push, because doubling \
            makes resizes geometrically rare.",
    },
    TrainingPair {
        question: "what is divide and conquer",
        answer: "Divide and conquer splits a problem into independent subproblems, solves \
            them recursively, and combines the results, as in merge sort, quicksort, and \
            binary search. Analyze the recurrence with the master theorem: T(n) = 2T(n/2) + \
            O(n) gives O(n log n).",
    },
    TrainingPair {
        question: "what is a segment tree or fenwick tree",
        answer: "Both support range queries with point updates in O(log n). A Fenwick \
            (binary indexed) tree is compact and simple but handles invertible operations \
            like sums; a segment tree is more flexible (min, max, gcd, lazy range updates) \
            at the cost of more code and memory.",
    },
    TrainingPair {
        question: "what is level order traversal",
        answer: "Level-order traversal visits a tree breadth-first using a queue. Capture \
            the queue length at the start of each round to emit the tree level by level. \
            O(n) time, O(w) space for the widest level.",
    },
    TrainingPair {
        question: "how to validate a binary search tree",
        answer: "Recurse with an allowed (min, max) range for each node, tightening the \
            range as you descend; a node outside its range invalidates the tree. \
            Equivalently, an inorder traversal of a valid BST must be strictly increasing. \
            O(n) either way.",
    },
    TrainingPair {
        question: "what data structure for lru cache",
        answer: "Combine a hash map with a doubly linked list: the map points at list nodes, \
            the list keeps recency order. Get and put are both O(1): move a touched node to \
            the front, evict from the back when over capacity.",
    },
    TrainingPair {
        question: "what is graph coloring bipartite check",
        answer: "A graph is bipartite when its vertices split into two sets with no edge \
            inside a set. Check it by BFS or DFS, assigning alternating colors; an edge \
            joining two same-colored vertices means an odd cycle and a failed check. \
            O(V + E).",
    },
    TrainingPair {
        question: "what is the difference between o(n log n) and o(n^2)",
        answer: "O(n log n) grows only slightly faster than linear, while O(n^2) quadruples \
            when the input doubles. At n = 1e5, n log n is about 1.7 million steps but n^2 \
            is 10 billion, which is the difference between milliseconds and minutes; \
            comparison sorting's lower bound is Omega(n log n).",
    },
    TrainingPair {
        question: "how should i practice for coding interviews",
        answer: "Practice by topic, not at random: pick one pattern (two pointers, BFS, DP), \
            solve several problems with it, and write the complexity of every solution. \
            Re-derive solutions a few days later instead of re-reading them, and rehearse \
            explaining your approach out loud before you code.",
    },
    TrainingPair {
        question: "what language should i use for dsa practice",
        answer: "Use the language you are most fluent in; interviewers care about your \
            reasoning, not the language. Python is concise for practice, C++ and Java are \
            common in competitive programming for speed and their standard libraries. \
            Switching languages mid-preparation usually costs more than it gains.",
    },
    TrainingPair {
        question: "what is a deque and when is it useful",
        answer: "A deque supports O(1) push and pop at both ends. Its signature trick is the \
            monotonic deque for sliding-window maximum: keep indices whose values are \
            decreasing, drop expired indices at the front, and the window maximum is always \
            at the front. O(n) overall.",
    },
    TrainingPair {
        question: "what is hashing collision resolution",
        answer: "Collisions are unavoidable, so hash tables resolve them either by chaining \
            (each bucket holds a small list) or open addressing (probe other slots, as in \
            linear probing or Robin Hood hashing). Performance depends on the load factor; \
            tables resize when it climbs too high to keep operations O(1) on average.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_well_formed() {
        assert!(TRAINING_PAIRS.len() >= 50);

        let mut questions = HashSet::new();
        for pair in TRAINING_PAIRS {
            assert!(!pair.question.trim().is_empty());
            assert!(!pair.answer.trim().is_empty());
            // Questions double as intent keys and must be unique
            assert!(questions.insert(pair.question), "duplicate: {}", pair.question);
        }
    }
}
